//! Exhaustive checks of the day grid across a range of years.

use chrono::{Datelike, Months, NaiveDate};
use hrdash_calendar::date::DISPLAY_FORMAT;
use hrdash_calendar::{
    Bounds, CursorMonth, DayCell, day_grid, format_display, parse_date_like, to_iso,
};
use serde::Serialize;
use std::time::{Duration, Instant};

const WEEK_LEN: usize = 7;

/// Outcome of sweeping every month of one year.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRecord {
    pub year: i32,
    pub passed: bool,
    pub months_checked: u32,
    pub days_checked: u32,
    pub disabled_days: u32,
    pub failures: Vec<String>,
    #[serde(with = "duration_micros")]
    pub duration: Duration,
}

mod duration_micros {
    use serde::Serializer;
    use std::time::Duration;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_micros()).unwrap_or(u64::MAX))
    }
}

/// Check one month's grid, returning `(days, disabled)` or the first violation.
fn check_month(cursor: CursorMonth, bounds: &Bounds, today: NaiveDate) -> Result<(u32, u32), String> {
    let cells = day_grid(cursor, bounds, None, today);
    check_cells(cursor, &cells, bounds, today)
}

/// Validate `cells` against chrono's calendar and the raw bound values.
fn check_cells(
    cursor: CursorMonth,
    cells: &[DayCell],
    bounds: &Bounds,
    today: NaiveDate,
) -> Result<(u32, u32), String> {
    let (year, month) = (cursor.year(), cursor.month());
    let label = format!("{year}-{month:02}");

    let leading = cells.iter().take_while(|c| matches!(c, DayCell::Blank)).count();
    if leading >= WEEK_LEN {
        return Err(format!("{label}: {leading} leading blanks fill a whole week"));
    }

    let days = &cells[leading..];
    let expected_days = month_length(cursor).ok_or_else(|| format!("{label}: not a chrono month"))?;
    if u32::try_from(days.len()).ok() != Some(expected_days) {
        return Err(format!(
            "{label}: {} day cells, expected {expected_days}",
            days.len()
        ));
    }

    let mut disabled = 0;
    for (offset, cell) in days.iter().enumerate() {
        let DayCell::Day { day, date, disabled: flagged, .. } = *cell else {
            return Err(format!("{label}: blank cell after the first day"));
        };
        if usize::try_from(day).ok() != Some(offset + 1) || date.day() != day {
            return Err(format!("{label}: cell {} holds day {day} ({date})", offset + 1));
        }
        if date.year() != year || date.month() != month {
            return Err(format!("{label}: cell {day} is dated {date}"));
        }
        let column = (leading + offset) % WEEK_LEN;
        let weekday = usize::try_from(date.weekday().num_days_from_sunday()).unwrap_or(WEEK_LEN);
        if column != weekday {
            return Err(format!(
                "{label}-{day:02}: drawn in column {column}, falls on weekday {weekday}"
            ));
        }
        let reason = disabled_reason(bounds, date, today);
        if flagged != reason.is_some() {
            return Err(format!(
                "{label}-{day:02}: disabled flag is {flagged}, expected {}",
                reason.unwrap_or("selectable")
            ));
        }
        if flagged {
            disabled += 1;
        }
        check_round_trip(date)?;
    }
    Ok((expected_days, disabled))
}

/// Month length from chrono's own month arithmetic.
fn month_length(cursor: CursorMonth) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from((next - first).num_days()).ok()
}

/// Why `date` must be disabled, read straight from the bound values.
fn disabled_reason(bounds: &Bounds, date: NaiveDate, today: NaiveDate) -> Option<&'static str> {
    if bounds.min.is_some_and(|min| date < min) {
        Some("before minDate")
    } else if bounds.max.is_some_and(|max| date > max) {
        Some("after maxDate")
    } else if bounds.disable_future && date > today {
        Some("a future day")
    } else {
        None
    }
}

fn check_round_trip(date: NaiveDate) -> Result<(), String> {
    let iso = to_iso(date);
    let reparsed = parse_date_like(&iso).map_err(|err| format!("{iso}: {err}"))?;
    if reparsed != date {
        return Err(format!("{iso}: parsed back as {reparsed}"));
    }
    let display = format_display(Some(date));
    match NaiveDate::parse_from_str(&display, DISPLAY_FORMAT) {
        Ok(back) if back == date => Ok(()),
        Ok(back) => Err(format!("{display}: displayed date reads back as {back}")),
        Err(err) => Err(format!("{display}: {err}")),
    }
}

/// Sweep all twelve months of `year`.
#[must_use]
pub fn sweep_year(year: i32, bounds: &Bounds, today: NaiveDate) -> SweepRecord {
    let start = Instant::now();
    let mut record = SweepRecord {
        year,
        passed: true,
        months_checked: 0,
        days_checked: 0,
        disabled_days: 0,
        failures: Vec::new(),
        duration: Duration::ZERO,
    };
    for month in 1..=12 {
        record.months_checked += 1;
        match check_month(CursorMonth::new(year, month), bounds, today) {
            Ok((days, disabled)) => {
                record.days_checked += days;
                record.disabled_days += disabled;
            }
            Err(failure) => {
                log::debug!("sweep failure: {failure}");
                record.failures.push(failure);
            }
        }
    }
    record.passed = record.failures.is_empty();
    record.duration = start.elapsed();
    record
}

/// Sweep every year in `from..=to`.
#[must_use]
pub fn sweep_range(from: i32, to: i32, bounds: &Bounds, today: NaiveDate) -> Vec<SweepRecord> {
    (from..=to).map(|year| sweep_year(year, bounds, today)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn unbounded_year_passes() {
        let record = sweep_year(2024, &Bounds::default(), d(2024, 6, 15));
        assert!(record.passed, "{:?}", record.failures);
        assert_eq!(record.months_checked, 12);
        assert_eq!(record.days_checked, 366);
        assert_eq!(record.disabled_days, 0);
    }

    #[test]
    fn disable_future_counts_days_after_today() {
        let bounds = Bounds::new(None, None, true);
        let record = sweep_year(2024, &bounds, d(2024, 12, 30));
        assert!(record.passed);
        assert_eq!(record.disabled_days, 1);
    }

    #[test]
    fn min_max_window_counts_outside_days() {
        let bounds = Bounds::new(Some(d(2023, 3, 10)), Some(d(2023, 3, 20)), false);
        let record = sweep_year(2023, &bounds, d(2024, 1, 1));
        assert!(record.passed);
        assert_eq!(record.days_checked, 365);
        assert_eq!(record.disabled_days, 365 - 11);
    }

    #[test]
    fn shifted_columns_are_reported() {
        let cursor = CursorMonth::new(2024, 2);
        let today = d(2024, 6, 15);
        let mut cells = day_grid(cursor, &Bounds::default(), None, today);
        assert_eq!(check_cells(cursor, &cells, &Bounds::default(), today), Ok((29, 0)));

        // February 2024 starts on a Thursday; one blank fewer moves it to Wednesday.
        cells.remove(0);
        let err = check_cells(cursor, &cells, &Bounds::default(), today).unwrap_err();
        assert!(err.contains("2024-02-01: drawn in column 3, falls on weekday 4"), "{err}");
    }

    #[test]
    fn wrong_disabled_flags_are_reported() {
        let cursor = CursorMonth::new(2024, 6);
        let today = d(2024, 6, 15);
        let bounds = Bounds::new(None, None, true);
        let mut cells = day_grid(cursor, &Bounds::default(), None, today);
        let err = check_cells(cursor, &cells, &bounds, today).unwrap_err();
        assert!(err.contains("2024-06-16: disabled flag is false, expected a future day"), "{err}");

        cells = day_grid(cursor, &bounds, None, today);
        if let Some(DayCell::Day { disabled, .. }) = cells.iter_mut().find(|c| c.day() == Some(3)) {
            *disabled = true;
        }
        let err = check_cells(cursor, &cells, &bounds, today).unwrap_err();
        assert!(err.contains("2024-06-03: disabled flag is true, expected selectable"), "{err}");
    }

    #[test]
    fn missing_days_are_reported() {
        let cursor = CursorMonth::new(2023, 2);
        let today = d(2024, 1, 1);
        let mut cells = day_grid(cursor, &Bounds::default(), None, today);
        cells.pop();
        let err = check_cells(cursor, &cells, &Bounds::default(), today).unwrap_err();
        assert_eq!(err, "2023-02: 27 day cells, expected 28");
    }

    #[test]
    fn range_is_inclusive() {
        let records = sweep_range(1899, 1901, &Bounds::default(), d(2024, 1, 1));
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1899, 1900, 1901]);
        assert!(records.iter().all(|r| r.passed));
    }

    #[test]
    fn record_serializes_duration_as_micros() {
        let mut record = sweep_year(2000, &Bounds::default(), d(2024, 1, 1));
        record.duration = Duration::from_millis(2);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["duration"], 2000);
        assert_eq!(json["days_checked"], 366);
    }
}
