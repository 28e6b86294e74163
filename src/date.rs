use chrono::NaiveDate;

use crate::error::CookieLogError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date. Used directly as the clap value parser for `--date`.
pub fn parse_target_date(value: &str) -> Result<NaiveDate, CookieLogError> {
    let invalid = || CookieLogError::InvalidDate {
        value: value.to_string(),
    };
    if !has_date_shape(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Four-digit year, then a one or two digit month and day, all ASCII digits.
fn has_date_shape(value: &str) -> bool {
    let all_digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    let mut parts = value.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            all_digits(year, 4, 4) && all_digits(month, 1, 2) && all_digits(day, 1, 2)
        }
        _ => false,
    }
}

/// Canonical string form compared against the date prefix of each timestamp.
pub fn canonical_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
