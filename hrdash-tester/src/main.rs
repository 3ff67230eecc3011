mod grid;
mod reports;
mod sweep;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use hrdash_calendar::{
    Bounds, Clock, CursorMonth, DateSelectorState, SystemClock, YearWindow, day_grid,
    parse_date_like,
};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use reports::JsonReport;
use sweep::SweepRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Render one month as a text calendar
    Grid,
    /// Check the grid invariants for every month in a year range
    Sweep,
    /// Render the grid, then sweep
    Both,
}

impl TestMode {
    const fn renders_grid(self) -> bool {
        matches!(self, Self::Grid | Self::Both)
    }

    const fn sweeps(self) -> bool {
        matches!(self, Self::Sweep | Self::Both)
    }
}

#[derive(Debug, Parser)]
#[command(name = "hrdash-tester", version = "0.1.0")]
#[command(about = "QA sweeps and console rendering for the hrdash date selector grid")]
struct Args {
    /// What to run: grid (render), sweep (invariants), or both
    #[arg(long, value_enum, default_value_t = TestMode::Both)]
    mode: TestMode,

    /// Month to render as YYYY-MM (defaults to where the selector would open)
    #[arg(long)]
    month: Option<String>,

    /// First year to sweep (defaults to the start of the year picker window)
    #[arg(long)]
    from_year: Option<i32>,

    /// Last year to sweep, inclusive (defaults to the current year)
    #[arg(long)]
    to_year: Option<i32>,

    /// Earliest selectable date
    #[arg(long)]
    min_date: Option<String>,

    /// Latest selectable date
    #[arg(long)]
    max_date: Option<String>,

    /// Disable every day after today
    #[arg(long)]
    disable_future: bool,

    /// Committed value to mark in the rendered grid
    #[arg(long)]
    value: Option<String>,

    /// Override today's date
    #[arg(long)]
    today: Option<String>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "markdown"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Dates and ranges resolved from the command line.
#[derive(Debug)]
struct RunPlan {
    today: NaiveDate,
    bounds: Bounds,
    value: Option<NaiveDate>,
    cursor: CursorMonth,
    years: (i32, i32),
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let plan = resolve_plan(&args, &SystemClock)?;
    let start_time = Instant::now();

    let records = args
        .mode
        .sweeps()
        .then(|| sweep::sweep_range(plan.years.0, plan.years.1, &plan.bounds, plan.today));

    write_reports(&args, &plan, records.as_deref(), start_time)?;

    if records.iter().flatten().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn parse_arg_date(flag: &str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    raw.map(|raw| parse_date_like(raw).with_context(|| format!("invalid --{flag} `{raw}`")))
        .transpose()
}

fn parse_month(raw: &str) -> Result<CursorMonth> {
    let first = parse_date_like(&format!("{}-01", raw.trim()))
        .with_context(|| format!("invalid --month `{raw}`, expected YYYY-MM"))?;
    Ok(CursorMonth::from_date(first))
}

fn resolve_plan(args: &Args, clock: &dyn Clock) -> Result<RunPlan> {
    let today = parse_arg_date("today", args.today.as_deref())?.unwrap_or_else(|| clock.today());
    let min = parse_arg_date("min-date", args.min_date.as_deref())?;
    let max = parse_arg_date("max-date", args.max_date.as_deref())?;
    if let (Some(min), Some(max)) = (min, max)
        && min > max
    {
        bail!("--min-date {min} is after --max-date {max}");
    }
    let bounds = Bounds::new(min, max, args.disable_future);
    let value = parse_arg_date("value", args.value.as_deref())?;

    let cursor = match args.month.as_deref() {
        Some(raw) => parse_month(raw)?,
        None => DateSelectorState::new(value, &bounds, today).cursor(),
    };

    let window = YearWindow::for_today(today);
    let from = args.from_year.unwrap_or_else(|| window.first());
    let to = args.to_year.unwrap_or_else(|| window.last());
    if from > to {
        bail!("--from-year {from} is after --to-year {to}");
    }
    if args.verbose {
        println!(
            "{} today={today} cursor={}-{:02} years={from}..={to} bounds={bounds:?}",
            "⚙️".dimmed(),
            cursor.year(),
            cursor.month()
        );
    }

    Ok(RunPlan {
        today,
        bounds,
        value,
        cursor,
        years: (from, to),
    })
}

fn write_reports(
    args: &Args,
    plan: &RunPlan,
    records: Option<&[SweepRecord]>,
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    let grid_text = args
        .mode
        .renders_grid()
        .then(|| grid::render_month(plan.cursor, &plan.bounds, plan.value, plan.today));

    match args.report.as_str() {
        "json" => {
            let cells = args
                .mode
                .renders_grid()
                .then(|| day_grid(plan.cursor, &plan.bounds, plan.value, plan.today));
            let report = JsonReport {
                month: args.mode.renders_grid().then_some(plan.cursor),
                grid: cells.as_deref(),
                sweep: records,
            };
            reports::generate_json_report(output_target.writer(), &report)?;
        }
        "markdown" => {
            writeln!(output_target.writer(), "# hrdash Calendar Report\n")?;
            if let Some(text) = &grid_text {
                reports::generate_markdown_grid(
                    output_target.writer(),
                    &grid::month_title(plan.cursor),
                    text,
                )?;
            }
            if let Some(records) = records {
                reports::generate_markdown_report(output_target.writer(), records)?;
            }
        }
        _ => {
            writeln!(
                output_target.writer(),
                "{}",
                "📅 hrdash Calendar Tester".bright_cyan().bold()
            )?;
            writeln!(output_target.writer(), "{}", "=========================".cyan())?;
            if let Some(text) = &grid_text {
                writeln!(output_target.writer())?;
                write!(output_target.writer(), "{text}")?;
            }
            if let Some(records) = records {
                reports::generate_console_report(
                    output_target.writer(),
                    records,
                    start_time.elapsed(),
                )?;
            }
            let duration = start_time.elapsed();
            writeln!(output_target.writer())?;
            writeln!(output_target.writer(), "🏁 Total time: {duration:?}")?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
