//! Date parsing, serialization, and month arithmetic.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Value-side serialization format (`YYYY-MM-DD`).
pub const ISO_FORMAT: &str = "%Y-%m-%d";
/// Text-field format (`DD-MM-YYYY`).
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("date input is empty")]
    Empty,
    #[error("`{input}` is not a calendar date")]
    Malformed { input: String },
}

const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a host-supplied date-like string.
///
/// Accepts a plain `YYYY-MM-DD` date, an RFC 3339 timestamp, or a naive
/// timestamp. Timestamps keep the calendar date as written; no timezone
/// conversion is applied.
///
/// # Errors
///
/// Returns [`CalendarError::Empty`] for blank input and
/// [`CalendarError::Malformed`] when no accepted format matches.
pub fn parse_date_like(input: &str) -> Result<NaiveDate, CalendarError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::Empty);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_FORMAT) {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.date_naive());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|stamp| stamp.date())
        .ok_or_else(|| CalendarError::Malformed {
            input: trimmed.to_string(),
        })
}

/// Parse an optional input, treating missing or blank input as `None`.
///
/// # Errors
///
/// Propagates [`CalendarError::Malformed`] from [`parse_date_like`].
pub fn parse_optional(input: Option<&str>) -> Result<Option<NaiveDate>, CalendarError> {
    match input {
        None => Ok(None),
        Some(raw) => match parse_date_like(raw) {
            Ok(date) => Ok(Some(date)),
            Err(CalendarError::Empty) => Ok(None),
            Err(err) => Err(err),
        },
    }
}

/// Serialize a committed date as `YYYY-MM-DD`, anchored at noon.
#[must_use]
pub fn to_iso(date: NaiveDate) -> String {
    let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
    noon.date().format(ISO_FORMAT).to_string()
}

/// Text-field rendering of the committed selection; empty when nothing is selected.
#[must_use]
pub fn format_display(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}

#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday index of the first of the month, 0 = Sunday.
#[must_use]
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month.clamp(1, 12), 1)
        .map_or(0, |d| d.weekday().num_days_from_sunday())
}
