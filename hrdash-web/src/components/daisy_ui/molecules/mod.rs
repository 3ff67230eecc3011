pub mod calendar;
pub mod dropdown;

pub use calendar::{Calendar, CalendarProps};
pub use dropdown::{SearchableDropdown, SearchableDropdownProps};
