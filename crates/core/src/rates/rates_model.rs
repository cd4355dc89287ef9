use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single reference rate: one unit of the base currency buys `rate` units of `currency`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRate {
    pub currency: String,
    pub rate: Decimal,
}

impl ExchangeRate {
    pub fn new(currency: impl Into<String>, rate: Decimal) -> Self {
        Self {
            currency: currency.into(),
            rate,
        }
    }
}

/// All reference rates published for one calendar date, in feed order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub rates: Vec<ExchangeRate>,
}

impl Snapshot {
    pub fn new(date: NaiveDate, rates: Vec<ExchangeRate>) -> Self {
        Self { date, rates }
    }

    /// Rate for a currency code, if the snapshot lists it.
    pub fn rate(&self, currency: &str) -> Option<Decimal> {
        self.rates
            .iter()
            .find(|r| r.currency == currency)
            .map(|r| r.rate)
    }
}

/// Result of a date lookup.
///
/// `date` is the date whose data was actually served. It equals `requested`
/// unless the lookup fell back over a weekend or holiday.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    pub requested: NaiveDate,
    pub date: NaiveDate,
    pub rates: Vec<ExchangeRate>,
}

impl RateQuery {
    pub fn is_fallback(&self) -> bool {
        self.date != self.requested
    }

    /// Rates keyed by currency code, for rendering.
    pub fn rates_by_currency(&self) -> BTreeMap<String, Decimal> {
        self.rates
            .iter()
            .map(|r| (r.currency.clone(), r.rate))
            .collect()
    }
}

/// Result of a single currency lookup.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RateQuote {
    pub date: NaiveDate,
    pub currency: String,
    pub rate: Decimal,
}
