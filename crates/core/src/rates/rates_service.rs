use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::rate_cache::RateCache;
use super::rate_filter::CurrencyFilter;
use super::rates_errors::RatesError;
use super::rates_model::{RateQuery, RateQuote, Snapshot};
use super::rates_traits::RatesServiceTrait;
use crate::constants::BASE_CURRENCY;
use crate::errors::Result;
use crate::utils::time_utils::today_utc;

#[derive(Clone)]
pub struct RatesService {
    cache: Arc<RateCache>,
    filter: CurrencyFilter,
}

impl RatesService {
    pub fn new(cache: Arc<RateCache>, filter: CurrencyFilter) -> Self {
        Self { cache, filter }
    }

    /// Same as [`RatesServiceTrait::get_rates`] with an explicit notion of "today".
    pub fn get_rates_as_of(&self, date: NaiveDate, today: NaiveDate) -> Result<RateQuery> {
        if date > today {
            return Err(RatesError::in_future(date).into());
        }
        Ok(self.cache.lookup(date)?)
    }

    pub fn get_rate_as_of(
        &self,
        date: NaiveDate,
        currency: &str,
        today: NaiveDate,
    ) -> Result<RateQuote> {
        let currency = currency.trim().to_ascii_uppercase();
        let query = self.get_rates_as_of(date, today)?;

        if currency == BASE_CURRENCY {
            return Ok(RateQuote {
                date: query.date,
                currency,
                rate: Decimal::ONE,
            });
        }

        let rate = query
            .rates
            .iter()
            .find(|r| r.currency == currency)
            .map(|r| r.rate)
            .ok_or_else(|| RatesError::UnknownCurrency(currency.clone()))?;

        Ok(RateQuote {
            date: query.date,
            currency,
            rate,
        })
    }
}

impl RatesServiceTrait for RatesService {
    fn ingest(&self, snapshots: Vec<Snapshot>) -> Result<usize> {
        let received = snapshots.len();
        let filtered = snapshots.into_iter().map(|s| self.filter.apply(s));
        let inserted = self.cache.load(filtered)?;
        log::debug!(
            "Ingested {} of {} snapshots ({} dates cached)",
            inserted,
            received,
            self.cache.len()?
        );
        Ok(inserted)
    }

    fn get_rates(&self, date: NaiveDate) -> Result<RateQuery> {
        self.get_rates_as_of(date, today_utc())
    }

    fn get_rate(&self, date: NaiveDate, currency: &str) -> Result<RateQuote> {
        self.get_rate_as_of(date, currency, today_utc())
    }

    fn is_ready(&self) -> Result<bool> {
        Ok(!self.cache.is_empty()?)
    }

    fn cached_dates(&self) -> Result<usize> {
        Ok(self.cache.len()?)
    }

    fn latest_date(&self) -> Result<Option<NaiveDate>> {
        Ok(self.cache.latest_date()?)
    }
}
