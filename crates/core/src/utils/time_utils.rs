use chrono::{NaiveDate, Utc};

use crate::constants::{DATE_FORMAT, EARLIEST_RATE_DATE};
use crate::rates::RatesError;

/// Parses a calendar date in strict `YYYY-MM-DD` form.
///
/// chrono alone accepts single-digit months and days (`2010-7-4`); request
/// paths and feed attributes must always be zero padded, so the length is
/// checked first.
pub fn parse_rate_date(value: &str) -> Result<NaiveDate, RatesError> {
    if value.len() != 10 {
        return Err(RatesError::MalformedDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| RatesError::MalformedDate(value.to_string()))
}

/// The first date for which reference rates were ever published.
pub fn earliest_rate_date() -> NaiveDate {
    let (year, month, day) = EARLIEST_RATE_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
