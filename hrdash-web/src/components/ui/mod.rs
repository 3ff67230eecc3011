pub mod date_selector;

pub use date_selector::{DateSelector, DateSelectorProps};
