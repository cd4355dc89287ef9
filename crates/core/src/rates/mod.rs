//! Rates module - snapshot models, the shared rate cache, currency filtering
//! and the lookup service built on top of them.

mod rate_cache;
mod rate_filter;
mod rates_errors;
mod rates_model;
mod rates_service;
mod rates_traits;

pub use rate_cache::RateCache;
pub use rate_filter::{filter_snapshot, CurrencyFilter};
pub use rates_errors::RatesError;
pub use rates_model::{ExchangeRate, RateQuery, RateQuote, Snapshot};
pub use rates_service::RatesService;
pub use rates_traits::RatesServiceTrait;
