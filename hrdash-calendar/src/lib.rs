//! hrdash calendar core
//!
//! Platform-agnostic calendar math and widget state machines for the hrdash
//! admin dashboard. This crate has no UI or platform-specific dependencies;
//! the Yew components in `hrdash-web` drive these types.

pub mod bounds;
pub mod clock;
pub mod cursor;
pub mod date;
pub mod dropdown;
pub mod grid;
pub mod selector;

// Re-export commonly used types
pub use bounds::{Bounds, BoundsConfig};
pub use clock::{Clock, FixedClock, SystemClock};
pub use cursor::CursorMonth;
pub use date::{
    CalendarError, days_in_month, first_weekday, format_display, parse_date_like, parse_optional,
    to_iso,
};
pub use dropdown::{DropdownKey, DropdownOption, DropdownOutcome, DropdownState, filter_options};
pub use grid::{
    DayCell, DayState, MonthCell, YearCell, YearWindow, day_grid, month_grid, year_grid,
};
pub use selector::{Commit, DateSelectorState, NavDirection, ViewMode};
