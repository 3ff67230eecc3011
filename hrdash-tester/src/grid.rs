//! Plain-text month calendar for eyeballing the day grid from a terminal.

use chrono::NaiveDate;
use hrdash_calendar::{Bounds, CursorMonth, DayCell, DayState, day_grid};
use std::fmt::Write;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const CELL_WIDTH: usize = 5;

/// English heading for `cursor`, e.g. `June 2024`.
#[must_use]
pub fn month_title(cursor: CursorMonth) -> String {
    let name = usize::try_from(cursor.month_index())
        .ok()
        .and_then(|idx| MONTH_NAMES.get(idx))
        .copied()
        .unwrap_or("?");
    format!("{name} {}", cursor.year())
}

fn render_cell(cell: &DayCell) -> String {
    let Some(day) = cell.day() else {
        return " ".repeat(CELL_WIDTH);
    };
    let text = if cell.is_disabled() {
        format!("[{day:>2}]")
    } else {
        match cell.state() {
            DayState::Selected => format!("*{day:>2}*"),
            DayState::Today => format!("<{day:>2}>"),
            DayState::Plain | DayState::Blank => format!(" {day:>2} "),
        }
    };
    format!("{text:>CELL_WIDTH$}")
}

/// Render `cursor` as a seven-column calendar.
///
/// Disabled days appear as `[dd]`, the selected day as `*dd*` and today as
/// `<dd>`.
#[must_use]
pub fn render_month(
    cursor: CursorMonth,
    bounds: &Bounds,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> String {
    let mut out = String::new();
    let title = month_title(cursor);
    let width = CELL_WIDTH * WEEKDAYS.len();
    let _ = writeln!(out, "{title:^width$}");
    for day in WEEKDAYS {
        let _ = write!(out, "{day:>CELL_WIDTH$}");
    }
    out.push('\n');

    let cells = day_grid(cursor, bounds, selected, today);
    for week in cells.chunks(WEEKDAYS.len()) {
        let line: String = week.iter().map(render_cell).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn renders_title_and_header() {
        let out = render_month(CursorMonth::new(2024, 6), &Bounds::default(), None, d(2024, 6, 15));
        let mut lines = out.lines();
        assert_eq!(lines.next().map(str::trim), Some("June 2024"));
        let header: Vec<&str> = lines.next().unwrap().split_whitespace().collect();
        assert_eq!(header, WEEKDAYS);
    }

    #[test]
    fn june_2024_starts_on_saturday() {
        let out = render_month(CursorMonth::new(2024, 6), &Bounds::default(), None, d(2024, 1, 1));
        let first_week = out.lines().nth(2).unwrap();
        assert_eq!(first_week.trim(), "1");
        assert!(first_week.starts_with(&" ".repeat(CELL_WIDTH * 6)));
        // six blanks plus thirty days span six rows
        assert_eq!(out.lines().count(), 2 + 6);
    }

    #[test]
    fn marks_disabled_selected_and_today() {
        let bounds = Bounds::new(None, None, true);
        let out = render_month(
            CursorMonth::new(2024, 6),
            &bounds,
            Some(d(2024, 6, 3)),
            d(2024, 6, 15),
        );
        assert!(out.contains("* 3*"));
        assert!(out.contains("<15>"));
        assert!(out.contains("[16]"));
        assert!(out.contains("[30]"));
        assert!(!out.contains("[15]"));
    }
}
