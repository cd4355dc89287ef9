use std::collections::HashSet;
use std::str::FromStr;

use super::rates_model::Snapshot;
use crate::constants::CURRENCY_CODE_LEN;
use crate::errors::Error;

/// Keeps only the rates whose currency is in `interest`, in their original order.
///
/// Currencies of interest missing from the snapshot are simply absent from the result.
pub fn filter_snapshot(snapshot: &Snapshot, interest: &HashSet<String>) -> Snapshot {
    Snapshot {
        date: snapshot.date,
        rates: snapshot
            .rates
            .iter()
            .filter(|r| interest.contains(&r.currency))
            .cloned()
            .collect(),
    }
}

/// Which currencies the service keeps from each published snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CurrencyFilter {
    #[default]
    All,
    Only(HashSet<String>),
}

impl CurrencyFilter {
    /// Builds an `Only` filter, upper-casing the codes.
    pub fn only<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CurrencyFilter::Only(
            codes
                .into_iter()
                .map(|c| c.as_ref().trim().to_ascii_uppercase())
                .collect(),
        )
    }

    pub fn allows(&self, currency: &str) -> bool {
        match self {
            CurrencyFilter::All => true,
            CurrencyFilter::Only(interest) => interest.contains(currency),
        }
    }

    pub fn apply(&self, snapshot: Snapshot) -> Snapshot {
        match self {
            CurrencyFilter::All => snapshot,
            CurrencyFilter::Only(interest) => filter_snapshot(&snapshot, interest),
        }
    }
}

impl FromStr for CurrencyFilter {
    type Err = Error;

    /// Parses `*` or a comma separated list of currency codes such as `USD,GBP`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "*" {
            return Ok(CurrencyFilter::All);
        }

        let codes: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        if codes.is_empty() {
            return Err(Error::InvalidConfigValue(
                "currency list must not be empty".to_string(),
            ));
        }
        if let Some(bad) = codes
            .iter()
            .find(|c| c.len() != CURRENCY_CODE_LEN || !c.chars().all(|ch| ch.is_ascii_alphabetic()))
        {
            return Err(Error::InvalidConfigValue(format!(
                "'{}' is not a three letter currency code",
                bad
            )));
        }
        Ok(CurrencyFilter::only(codes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::ExchangeRate;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn full_snapshot() -> Snapshot {
        Snapshot::new(
            NaiveDate::from_ymd_opt(2010, 7, 14).unwrap(),
            vec![
                ExchangeRate::new("USD", dec!(1.2703)),
                ExchangeRate::new("JPY", dec!(112.18)),
                ExchangeRate::new("GBP", dec!(0.8343)),
                ExchangeRate::new("CHF", dec!(1.3397)),
            ],
        )
    }

    fn interest(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let filtered = filter_snapshot(&full_snapshot(), &interest(&["GBP", "USD"]));

        assert_eq!(filtered.date, full_snapshot().date);
        assert_eq!(
            filtered.rates,
            vec![
                ExchangeRate::new("USD", dec!(1.2703)),
                ExchangeRate::new("GBP", dec!(0.8343)),
            ]
        );
    }

    #[test]
    fn test_filter_omits_missing_currencies() {
        let filtered = filter_snapshot(&full_snapshot(), &interest(&["USD", "LTL"]));
        assert_eq!(filtered.rates, vec![ExchangeRate::new("USD", dec!(1.2703))]);

        let none = filter_snapshot(&full_snapshot(), &HashSet::new());
        assert!(none.rates.is_empty());
    }

    #[test]
    fn test_all_filter_is_identity() {
        assert_eq!(CurrencyFilter::All.apply(full_snapshot()), full_snapshot());
        assert!(CurrencyFilter::All.allows("XYZ"));
    }

    #[test]
    fn test_parse_currency_list() {
        let filter: CurrencyFilter = " usd, GBP ,".parse().unwrap();
        assert_eq!(filter, CurrencyFilter::only(["USD", "GBP"]));
        assert!(filter.allows("USD"));
        assert!(!filter.allows("JPY"));

        assert_eq!("*".parse::<CurrencyFilter>().unwrap(), CurrencyFilter::All);
    }

    #[test]
    fn test_parse_rejects_invalid_codes() {
        for input in ["", " , ", "US", "USD,EURO", "U5D"] {
            assert!(
                matches!(input.parse::<CurrencyFilter>(), Err(Error::InvalidConfigValue(_))),
                "{input:?} should be rejected"
            );
        }
    }
}
