//! State machine behind the popover date selector.
//!
//! The machine never fails: interactions that would cross the configured
//! bounds are absorbed as no-ops, mirroring the disabled affordances the view
//! renders for them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::bounds::Bounds;
use crate::cursor::CursorMonth;
use crate::date::{format_display, to_iso};
use crate::grid::{DayCell, MonthCell, YearCell, YearWindow, day_grid, month_grid, year_grid};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ViewMode {
    #[default]
    Day,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

impl NavDirection {
    const fn delta(self) -> i32 {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

/// Value handed to the host by a committing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Date(NaiveDate),
    Cleared,
}

impl Commit {
    /// `YYYY-MM-DD`, or the empty string for a cleared value.
    #[must_use]
    pub fn value(self) -> String {
        match self {
            Self::Date(date) => to_iso(date),
            Self::Cleared => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSelectorState {
    view: ViewMode,
    cursor: CursorMonth,
    selected: Option<NaiveDate>,
    open: bool,
    years: YearWindow,
}

impl DateSelectorState {
    /// Initial state: the cursor starts at the controlled value, else `max`,
    /// else today. The year window is fixed from `today` here and never
    /// recomputed.
    #[must_use]
    pub fn new(value: Option<NaiveDate>, bounds: &Bounds, today: NaiveDate) -> Self {
        let anchor = value.or(bounds.max).unwrap_or(today);
        Self {
            view: ViewMode::Day,
            cursor: CursorMonth::from_date(anchor),
            selected: value,
            open: false,
            years: YearWindow::for_today(today),
        }
    }

    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    #[must_use]
    pub const fn cursor(&self) -> CursorMonth {
        self.cursor
    }

    #[must_use]
    pub const fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn years(&self) -> YearWindow {
        self.years
    }

    /// Text shown in the read-only field (`DD-MM-YYYY`, empty when unset).
    #[must_use]
    pub fn display_text(&self) -> String {
        format_display(self.selected)
    }

    /// Grid header such as `"March 2024"`, given twelve month names.
    #[must_use]
    pub fn header_label(&self, month_names: &[String]) -> String {
        usize::try_from(self.cursor.month_index())
            .ok()
            .and_then(|idx| month_names.get(idx))
            .map_or_else(
                || format!("{:02} {}", self.cursor.month(), self.cursor.year()),
                |name| format!("{name} {}", self.cursor.year()),
            )
    }

    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Hide the popover from any view. Cursor and selection are untouched.
    pub const fn close(&mut self) {
        self.open = false;
        self.view = ViewMode::Day;
    }

    /// Shift the cursor one month. Returns `false` (and changes nothing) when
    /// the target month falls outside `bounds`.
    pub fn navigate_month(&mut self, direction: NavDirection, bounds: &Bounds) -> bool {
        let target = self.cursor.shifted(direction.delta());
        if !bounds.allows_month(target) {
            log::debug!(
                "month navigation to {}-{:02} rejected by bounds",
                target.year(),
                target.month()
            );
            return false;
        }
        self.cursor = target;
        true
    }

    pub const fn switch_view(&mut self, target: ViewMode) {
        self.view = target;
    }

    /// Jump to month `index` (0-based) of the cursor year and return to the day view.
    pub const fn pick_month(&mut self, index: u32) {
        if index > 11 {
            return;
        }
        self.cursor = self.cursor.with_month(index + 1);
        self.view = ViewMode::Day;
    }

    /// Jump to `year` keeping the cursor month and return to the day view.
    pub const fn pick_year(&mut self, year: i32) {
        if !self.years.contains(year) {
            return;
        }
        self.cursor = self.cursor.with_year(year);
        self.view = ViewMode::Day;
    }

    /// Commit `day` of the cursor month unless it is disabled or does not exist.
    pub fn pick_day(&mut self, day: u32, bounds: &Bounds, today: NaiveDate) -> Option<Commit> {
        let date = self.cursor.day(day)?;
        if bounds.is_day_disabled(date, today) {
            return None;
        }
        self.selected = Some(date);
        self.close();
        Some(Commit::Date(date))
    }

    pub const fn clear(&mut self) -> Commit {
        self.selected = None;
        self.close();
        Commit::Cleared
    }

    pub fn today(&mut self, today: NaiveDate) -> Commit {
        self.cursor = CursorMonth::from_date(today);
        self.selected = Some(today);
        self.close();
        Commit::Date(today)
    }

    /// Follow a change of the host's controlled value.
    pub fn sync_value(&mut self, value: Option<NaiveDate>) {
        if let Some(date) = value {
            self.cursor = CursorMonth::from_date(date);
        }
        self.selected = value;
    }

    #[must_use]
    pub fn day_cells(&self, bounds: &Bounds, today: NaiveDate) -> Vec<DayCell> {
        day_grid(self.cursor, bounds, self.selected, today)
    }

    #[must_use]
    pub fn month_cells(&self, bounds: &Bounds, today: NaiveDate) -> [MonthCell; 12] {
        month_grid(self.cursor, bounds, today)
    }

    #[must_use]
    pub fn year_cells(&self, bounds: &Bounds, today: NaiveDate) -> Vec<YearCell> {
        year_grid(&self.years, self.cursor, bounds, today)
    }
}
