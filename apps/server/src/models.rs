use std::collections::BTreeMap;

use chrono::NaiveDate;
use eurofx_core::{RateQuery, RateQuote};
use rust_decimal::Decimal;
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

/// Body of `GET /{date}`. `date` is the date actually served.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RatesResponse {
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_rate_map")]
    pub rates: BTreeMap<String, Decimal>,
}

impl From<RateQuery> for RatesResponse {
    fn from(query: RateQuery) -> Self {
        Self {
            rates: query.rates_by_currency(),
            date: query.date,
        }
    }
}

/// Body of `GET /{date}/{currency}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RateResponse {
    pub date: NaiveDate,
    pub currency: String,
    #[serde(serialize_with = "serialize_rate")]
    pub rate: Decimal,
}

impl From<RateQuote> for RateResponse {
    fn from(quote: RateQuote) -> Self {
        Self {
            date: quote.date,
            currency: quote.currency,
            rate: quote.rate,
        }
    }
}

/// Nearest f64 to the published decimal text, so JSON shows exactly the feed's digits.
fn rate_as_f64(rate: &Decimal) -> Result<f64, std::num::ParseFloatError> {
    rate.normalize().to_string().parse()
}

fn serialize_rate<S>(rate: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(rate_as_f64(rate).map_err(S::Error::custom)?)
}

fn serialize_rate_map<S>(rates: &BTreeMap<String, Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(rates.len()))?;
    for (currency, rate) in rates {
        map.serialize_entry(currency, &rate_as_f64(rate).map_err(S::Error::custom)?)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rates_render_with_published_digits() {
        let response = RatesResponse {
            date: NaiveDate::from_ymd_opt(2013, 11, 29).unwrap(),
            rates: BTreeMap::from([
                ("GBP".to_string(), dec!(0.83275)),
                ("USD".to_string(), dec!(1.3611)),
                ("JPY".to_string(), dec!(139.210)),
            ]),
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"date":"2013-11-29","rates":{"GBP":0.83275,"JPY":139.21,"USD":1.3611}}"#
        );
    }

    #[test]
    fn test_single_rate_renders_as_number() {
        let response = RateResponse {
            date: NaiveDate::from_ymd_opt(2010, 7, 9).unwrap(),
            currency: "USD".to_string(),
            rate: dec!(1.2637),
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"date":"2010-07-09","currency":"USD","rate":1.2637}"#
        );
    }
}
