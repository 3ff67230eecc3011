use chrono::{Local, NaiveDate};

/// Source of "today" for bounds checks, the today marker, and the Today action.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the running process (the browser clock on wasm32).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn system_clock_is_a_plausible_date() {
        use chrono::Datelike;
        assert!(SystemClock.today().year() >= 2020);
    }
}
