use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cursor::CursorMonth;
use crate::date::parse_optional;

/// Constraints on which days are selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    pub disable_future: bool,
}

/// Host-facing bounds configuration, as raw date-like strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundsConfig {
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub disable_future: bool,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: Option<NaiveDate>, max: Option<NaiveDate>, disable_future: bool) -> Self {
        Self {
            min,
            max,
            disable_future,
        }
    }

    /// Resolve a raw configuration. Malformed bounds are logged and dropped.
    #[must_use]
    pub fn from_config(config: &BoundsConfig) -> Self {
        Self {
            min: lenient_bound("minDate", config.min_date.as_deref()),
            max: lenient_bound("maxDate", config.max_date.as_deref()),
            disable_future: config.disable_future,
        }
    }

    /// A day is disabled iff it is before `min`, after `max`, or in the future
    /// while `disable_future` is set.
    #[must_use]
    pub fn is_day_disabled(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min)
            || self.max.is_some_and(|max| date > max)
            || (self.disable_future && date > today)
    }

    /// Whether month navigation may land on `target`.
    ///
    /// Compares the first of `target` against `max` and against the first of
    /// `min`'s month; `disable_future` does not restrict navigation.
    #[must_use]
    pub fn allows_month(&self, target: CursorMonth) -> bool {
        let Some(start) = target.first_day() else {
            return false;
        };
        if self.max.is_some_and(|max| start > max) {
            return false;
        }
        let floor = self
            .min
            .and_then(|min| NaiveDate::from_ymd_opt(min.year(), min.month(), 1));
        !floor.is_some_and(|floor| start < floor)
    }

    /// True when every day of `month` is disabled.
    #[must_use]
    pub fn month_out_of_range(&self, month: CursorMonth, today: NaiveDate) -> bool {
        match (month.first_day(), month.last_day()) {
            (Some(first), Some(last)) => self.span_out_of_range(first, last, today),
            _ => true,
        }
    }

    /// True when every day of `year` is disabled.
    #[must_use]
    pub fn year_out_of_range(&self, year: i32, today: NaiveDate) -> bool {
        match (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) {
            (Some(first), Some(last)) => self.span_out_of_range(first, last, today),
            _ => true,
        }
    }

    fn span_out_of_range(&self, first: NaiveDate, last: NaiveDate, today: NaiveDate) -> bool {
        let mut ceiling = last;
        if let Some(max) = self.max {
            ceiling = ceiling.min(max);
        }
        if self.disable_future {
            ceiling = ceiling.min(today);
        }
        let floor = self.min.map_or(first, |min| first.max(min));
        floor > ceiling
    }
}

fn lenient_bound(name: &str, raw: Option<&str>) -> Option<NaiveDate> {
    match parse_optional(raw) {
        Ok(date) => date,
        Err(err) => {
            log::warn!("ignoring {name}: {err}");
            None
        }
    }
}
