use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by rate lookups.
///
/// `OutOfRange` and `MalformedDate` are permanent client errors. `NoDataAvailable`
/// means the date is plausible but nothing has been loaded for it (yet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatesError {
    #[error("{date} is out of range: {reason}")]
    OutOfRange { date: NaiveDate, reason: String },

    #[error("No data available for requested date {0}")]
    NoDataAvailable(NaiveDate),

    #[error("Invalid date '{0}'. Must be a date of form YYYY-MM-DD")]
    MalformedDate(String),

    #[error("Currency '{0}' is not available")]
    UnknownCurrency(String),

    #[error("Rate cache error: {0}")]
    CacheError(String),
}

impl RatesError {
    pub(crate) fn before_earliest(date: NaiveDate, earliest: NaiveDate) -> Self {
        RatesError::OutOfRange {
            date,
            reason: format!("no data is published before {}", earliest),
        }
    }

    pub(crate) fn in_future(date: NaiveDate) -> Self {
        RatesError::OutOfRange {
            date,
            reason: "the date is in the future".to_string(),
        }
    }
}
