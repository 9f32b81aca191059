//! Calendar date helpers.
//!
//! Dates are `YYYY-MM-DD` strings wherever they cross a boundary.

use time::{macros::format_description, Date, Duration};

/// Length of the trailing-year window in days
pub const TRAILING_YEAR_DAYS: i64 = 365;

pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// First day of the 365-day period ending at `date`.
pub fn trailing_year_start(date: Date) -> Date {
    date.checked_sub(Duration::days(TRAILING_YEAR_DAYS))
        .unwrap_or(Date::MIN)
}
