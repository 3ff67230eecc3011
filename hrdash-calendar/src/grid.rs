//! Pure grid builders for the day, month, and year views.
//!
//! Each builder takes the bounds, selection, and "today" explicitly so the
//! calendar math stays independent of any UI state.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::bounds::Bounds;
use crate::cursor::CursorMonth;
use crate::date::first_weekday;

/// Number of years offered by the year view.
pub const YEAR_WINDOW_LEN: i32 = 201;
/// Distance from "now" to the center of the year window.
pub const YEAR_WINDOW_CENTER_OFFSET: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayCell {
    /// Leading filler before the first of the month.
    Blank,
    Day {
        day: u32,
        date: NaiveDate,
        disabled: bool,
        selected: bool,
        today: bool,
    },
}

/// Visual state of a day cell; selection wins over the today marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Blank,
    Plain,
    Today,
    Selected,
}

impl DayCell {
    #[must_use]
    pub const fn state(&self) -> DayState {
        match *self {
            Self::Blank => DayState::Blank,
            Self::Day { selected: true, .. } => DayState::Selected,
            Self::Day { today: true, .. } => DayState::Today,
            Self::Day { .. } => DayState::Plain,
        }
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        match *self {
            Self::Blank => true,
            Self::Day { disabled, .. } => disabled,
        }
    }

    #[must_use]
    pub const fn day(&self) -> Option<u32> {
        match *self {
            Self::Blank => None,
            Self::Day { day, .. } => Some(day),
        }
    }
}

/// Day view for `cursor`: `first_weekday` blanks followed by one cell per day.
#[must_use]
pub fn day_grid(
    cursor: CursorMonth,
    bounds: &Bounds,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<DayCell> {
    let leading = first_weekday(cursor.year(), cursor.month());
    let total = cursor.days();
    let mut cells = Vec::with_capacity(usize::try_from(leading + total).unwrap_or(0));
    cells.extend((0..leading).map(|_| DayCell::Blank));
    cells.extend((1..=total).filter_map(|day| {
        cursor.day(day).map(|date| DayCell::Day {
            day,
            date,
            disabled: bounds.is_day_disabled(date, today),
            selected: selected == Some(date),
            today: date == today,
        })
    }));
    cells
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    /// Zero-based month index.
    pub index: u32,
    pub current: bool,
    pub disabled: bool,
}

#[must_use]
pub fn month_grid(cursor: CursorMonth, bounds: &Bounds, today: NaiveDate) -> [MonthCell; 12] {
    std::array::from_fn(|i| {
        let index = u32::try_from(i).unwrap_or(0);
        let month = cursor.with_month(index + 1);
        MonthCell {
            index,
            current: index == cursor.month_index(),
            disabled: bounds.month_out_of_range(month, today),
        }
    })
}

/// The fixed range of years offered by the year view, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearWindow {
    first: i32,
    last: i32,
}

impl YearWindow {
    /// 201 years centered 100 years before `now_year`, i.e. `now-200 ..= now`.
    #[must_use]
    pub const fn around(now_year: i32) -> Self {
        let center = now_year - YEAR_WINDOW_CENTER_OFFSET;
        let half = YEAR_WINDOW_LEN / 2;
        Self {
            first: center - half,
            last: center + half,
        }
    }

    #[must_use]
    pub fn for_today(today: NaiveDate) -> Self {
        Self::around(today.year())
    }

    #[must_use]
    pub const fn first(self) -> i32 {
        self.first
    }

    #[must_use]
    pub const fn last(self) -> i32 {
        self.last
    }

    #[must_use]
    pub const fn contains(self, year: i32) -> bool {
        year >= self.first && year <= self.last
    }

    #[must_use]
    pub fn len(self) -> usize {
        usize::try_from(self.last - self.first + 1).unwrap_or(0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.last < self.first
    }

    pub fn years(self) -> impl DoubleEndedIterator<Item = i32> {
        self.first..=self.last
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCell {
    pub year: i32,
    pub current: bool,
    pub disabled: bool,
}

/// Year view, ascending.
#[must_use]
pub fn year_grid(
    window: &YearWindow,
    cursor: CursorMonth,
    bounds: &Bounds,
    today: NaiveDate,
) -> Vec<YearCell> {
    window
        .years()
        .map(|year| YearCell {
            year,
            current: year == cursor.year(),
            disabled: bounds.year_out_of_range(year, today),
        })
        .collect()
}
