use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::rates_errors::RatesError;
use super::rates_model::{ExchangeRate, RateQuery, Snapshot};

/// In-memory history of reference rates, keyed by publication date.
///
/// The history only grows: the first snapshot stored for a date wins and is
/// never replaced. Readers share the lock, so lookups run in parallel; a load
/// takes the write lock and is never observed half-applied.
///
/// Lookups fall back to the nearest earlier date with data, which covers
/// weekends and bank holidays. The fallback never goes below `earliest_date`.
pub struct RateCache {
    earliest_date: NaiveDate,
    snapshots: RwLock<BTreeMap<NaiveDate, Vec<ExchangeRate>>>,
}

impl RateCache {
    /// Creates an empty cache whose lookups are bounded below by `earliest_date`.
    pub fn new(earliest_date: NaiveDate) -> Self {
        Self {
            earliest_date,
            snapshots: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn earliest_date(&self) -> NaiveDate {
        self.earliest_date
    }

    /// Stores every snapshot whose date is not yet present.
    ///
    /// Known dates are skipped, not overwritten, so loading the same feed twice
    /// is a no-op. Snapshots dated before `earliest_date` can never be served
    /// and are skipped as well. Returns the number of dates newly stored.
    pub fn load<I>(&self, snapshots: I) -> Result<usize, RatesError>
    where
        I: IntoIterator<Item = Snapshot>,
    {
        let mut stored = self
            .snapshots
            .write()
            .map_err(|e| RatesError::CacheError(e.to_string()))?;

        let mut inserted = 0;
        for snapshot in snapshots {
            if snapshot.date < self.earliest_date || stored.contains_key(&snapshot.date) {
                continue;
            }
            stored.insert(snapshot.date, snapshot.rates);
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Resolves `requested` to the nearest date on or before it that has data.
    ///
    /// The whole resolution runs under one read guard, so it sees a single
    /// consistent state of the history even while a load is queued.
    pub fn lookup(&self, requested: NaiveDate) -> Result<RateQuery, RatesError> {
        if requested < self.earliest_date {
            return Err(RatesError::before_earliest(requested, self.earliest_date));
        }

        let stored = self
            .snapshots
            .read()
            .map_err(|e| RatesError::CacheError(e.to_string()))?;

        stored
            .range(self.earliest_date..=requested)
            .next_back()
            .map(|(date, rates)| RateQuery {
                requested,
                date: *date,
                rates: rates.clone(),
            })
            .ok_or(RatesError::NoDataAvailable(requested))
    }

    /// Snapshot stored for exactly `date`, without fallback.
    pub fn get(&self, date: NaiveDate) -> Result<Option<Snapshot>, RatesError> {
        let stored = self
            .snapshots
            .read()
            .map_err(|e| RatesError::CacheError(e.to_string()))?;
        Ok(stored
            .get(&date)
            .map(|rates| Snapshot::new(date, rates.clone())))
    }

    /// Number of dates with data.
    pub fn len(&self) -> Result<usize, RatesError> {
        let stored = self
            .snapshots
            .read()
            .map_err(|e| RatesError::CacheError(e.to_string()))?;
        Ok(stored.len())
    }

    pub fn is_empty(&self) -> Result<bool, RatesError> {
        Ok(self.len()? == 0)
    }

    /// Most recent date with data.
    pub fn latest_date(&self) -> Result<Option<NaiveDate>, RatesError> {
        let stored = self
            .snapshots
            .read()
            .map_err(|e| RatesError::CacheError(e.to_string()))?;
        Ok(stored.keys().next_back().copied())
    }
}
