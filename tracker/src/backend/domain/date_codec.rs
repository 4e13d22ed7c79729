//! Canonical date handling.
//!
//! Every date that crosses a module boundary is a `YYYY-MM-DD` string built
//! from local calendar fields. Comparisons ("same day", "is today") are made
//! on these strings, never on time-of-day values.

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("'{0}' is not in YYYY-MM-DD form")]
    Malformed(String),
    #[error("'{0}' is not a valid calendar day")]
    InvalidDay(String),
}

/// Format a date as its canonical day string
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a canonical day string.
///
/// The shape is checked strictly before chrono sees the input, since chrono
/// would otherwise accept unpadded fields such as `2026-3-5`.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    if !has_canonical_shape(input) {
        return Err(ParseError::Malformed(input.to_string()));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDay(input.to_string()))
}

/// Extract `(year, month)` from a canonical day string
pub fn year_month(input: &str) -> Result<(i32, u32), ParseError> {
    let date = parse_date(input)?;
    Ok((date.year(), date.month()))
}

/// Today's date according to the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_today(date: &str, today: NaiveDate) -> bool {
    date == format_date(today)
}

fn has_canonical_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
