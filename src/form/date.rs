//! Calendar-date wire format for date-of-birth.
//!
//! The same format description drives request serialization, `<input type="date">`
//! values, and parsing, so a date sent to the server reads back unchanged.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const WIRE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    // Only fails for descriptions needing components a `Date` lacks.
    date.format(WIRE_FORMAT).unwrap_or_default()
}

/// Format an optional date, sending absent dates as an empty string.
pub fn format_optional_date(date: Option<Date>) -> String {
    date.map(format_date).unwrap_or_default()
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns the parse error when `raw` is not a valid calendar date in that format.
pub fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw, WIRE_FORMAT)
}
