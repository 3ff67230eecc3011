use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date::days_in_month;

/// The year and month being browsed, independent of the committed selection.
///
/// `month` is 1-based and always within `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CursorMonth {
    year: i32,
    month: u32,
}

impl CursorMonth {
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        let month = if month < 1 {
            1
        } else if month > 12 {
            12
        } else {
            month
        };
        Self { year, month }
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Zero-based month index, as used by the month grid.
    #[must_use]
    pub const fn month_index(self) -> u32 {
        self.month - 1
    }

    #[must_use]
    pub const fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// First day of the month; `None` only outside chrono's representable range.
    #[must_use]
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    #[must_use]
    pub fn last_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days())
    }

    /// Date for `day` of this month, if it exists.
    #[must_use]
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    #[must_use]
    pub fn shifted(self, delta_months: i32) -> Self {
        let month_offset = i32::try_from(self.month_index()).unwrap_or(0);
        let zero_based = self.year * 12 + month_offset + delta_months;
        let year = zero_based.div_euclid(12);
        let month = u32::try_from(zero_based.rem_euclid(12)).unwrap_or(0) + 1;
        Self { year, month }
    }

    #[must_use]
    pub const fn with_month(self, month: u32) -> Self {
        Self::new(self.year, month)
    }

    #[must_use]
    pub const fn with_year(self, year: i32) -> Self {
        Self::new(year, self.month)
    }
}
