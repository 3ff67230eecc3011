use anyhow::Result;
use colored::Colorize;
use hrdash_calendar::{CursorMonth, DayCell};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::sweep::SweepRecord;

/// Machine-readable output of a run; sections that did not run are `null`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub month: Option<CursorMonth>,
    pub grid: Option<&'a [DayCell]>,
    pub sweep: Option<&'a [SweepRecord]>,
}

fn totals(records: &[SweepRecord]) -> (usize, usize, u32) {
    let passed = records.iter().filter(|r| r.passed).count();
    let days = records.iter().map(|r| r.days_checked).sum();
    (records.len(), passed, days)
}

pub fn generate_console_report(
    out: &mut dyn Write,
    records: &[SweepRecord],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Calendar Sweep Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "=========================".cyan())?;

    let (total, passed, days) = totals(records);
    writeln!(out, "Years swept: {total}")?;
    writeln!(out, "Days checked: {days}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for record in records.iter().filter(|r| !r.passed) {
        writeln!(out, "{} {}", "❌ FAIL".red(), record.year.to_string().bold())?;
        for failure in &record.failures {
            writeln!(out, "     • {}", failure.red())?;
        }
    }
    if passed == total {
        writeln!(out, "{}", "✅ Every month satisfied the grid invariants".green())?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, report: &JsonReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Fenced text calendar for the markdown report.
pub fn generate_markdown_grid(out: &mut dyn Write, title: &str, grid: &str) -> Result<()> {
    writeln!(out, "## {title}\n")?;
    writeln!(out, "```text")?;
    write!(out, "{grid}")?;
    writeln!(out, "```\n")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, records: &[SweepRecord]) -> Result<()> {
    let (total, passed, days) = totals(records);
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Years swept**: {total}")?;
    writeln!(out, "- **Days checked**: {days}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}\n", total - passed)?;

    writeln!(out, "## Years\n")?;
    writeln!(out, "| Year | Status | Days | Disabled |")?;
    writeln!(out, "|------|--------|------|----------|")?;
    for record in records {
        let status = if record.passed { "✅" } else { "❌" };
        writeln!(
            out,
            "| {} | {status} | {} | {} |",
            record.year, record.days_checked, record.disabled_days
        )?;
    }

    let failed: Vec<_> = records.iter().filter(|r| !r.passed).collect();
    if !failed.is_empty() {
        writeln!(out, "\n## Failures\n")?;
        for record in failed {
            writeln!(out, "### {}\n", record.year)?;
            for failure in &record.failures {
                writeln!(out, "- {failure}")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, failures: &[&str]) -> SweepRecord {
        SweepRecord {
            year,
            passed: failures.is_empty(),
            months_checked: 12,
            days_checked: 365,
            disabled_days: 0,
            failures: failures.iter().map(ToString::to_string).collect(),
            duration: Duration::from_micros(5),
        }
    }

    #[test]
    fn markdown_lists_failures() {
        let mut buf = Vec::new();
        let records = [record(2023, &[]), record(2024, &["2024-02: 28 day cells, expected 29"])];
        generate_markdown_report(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("- **Failed**: 1"));
        assert!(text.contains("| 2023 | ✅ | 365 | 0 |"));
        assert!(text.contains("### 2024"));
        assert!(text.contains("expected 29"));
    }

    #[test]
    fn json_nulls_sections_that_did_not_run() {
        let mut buf = Vec::new();
        let records = [record(1999, &[])];
        let report = JsonReport {
            month: None,
            grid: None,
            sweep: Some(&records),
        };
        generate_json_report(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value["grid"].is_null());
        assert_eq!(value["sweep"][0]["year"], 1999);
        assert_eq!(value["sweep"][0]["passed"], true);
    }

    #[test]
    fn markdown_grid_is_fenced() {
        let mut buf = Vec::new();
        generate_markdown_grid(&mut buf, "June 2024", "Su Mo\n").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "## June 2024\n\n```text\nSu Mo\n```\n\n");
    }

    #[test]
    fn console_reports_counts() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &[record(2000, &["bad"])], Duration::ZERO).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Years swept: 1"));
        assert!(text.contains("Failed: 1"));
        assert!(text.contains("• bad"));
    }
}
