use chrono::NaiveDate;

use super::rates_model::{RateQuery, RateQuote, Snapshot};
use crate::errors::Result;

/// Trait defining the contract for rate lookup operations.
pub trait RatesServiceTrait: Send + Sync {
    /// Filters and stores newly published snapshots. Returns how many dates were new.
    fn ingest(&self, snapshots: Vec<Snapshot>) -> Result<usize>;

    /// All configured rates for `date`, falling back over non-business days.
    fn get_rates(&self, date: NaiveDate) -> Result<RateQuery>;

    /// One currency's rate for `date`, with the same fallback.
    fn get_rate(&self, date: NaiveDate, currency: &str) -> Result<RateQuote>;

    /// True once at least one date is cached.
    fn is_ready(&self) -> Result<bool>;

    fn cached_dates(&self) -> Result<usize>;

    fn latest_date(&self) -> Result<Option<NaiveDate>>;
}
