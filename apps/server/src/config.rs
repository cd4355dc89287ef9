use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use eurofx_core::constants::DEFAULT_CURRENCIES;
use eurofx_core::utils::time_utils::{earliest_rate_date, parse_rate_date};
use eurofx_core::CurrencyFilter;
use eurofx_feed::DEFAULT_FEED_URL;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_HISTORIC_DATA: &str = "./data/eurofxref-hist.xml";
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60 * 60;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Historical document loaded once at boot
    pub historic_data: PathBuf,
    pub feed_url: String,
    pub refresh_interval: Duration,
    pub currencies: CurrencyFilter,
    /// Lookups before this date are rejected
    pub earliest_date: NaiveDate,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `EFX_*` variables, after loading an optional `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("EFX_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid EFX_LISTEN_ADDR")?;
        let historic_data = lookup("EFX_HISTORIC_DATA")
            .unwrap_or_else(|| DEFAULT_HISTORIC_DATA.into())
            .into();
        let feed_url = lookup("EFX_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.into());

        let refresh_secs: u64 = match lookup("EFX_REFRESH_INTERVAL_SECS") {
            Some(v) => v.trim().parse().context("Invalid EFX_REFRESH_INTERVAL_SECS")?,
            None => DEFAULT_REFRESH_INTERVAL_SECS,
        };
        if refresh_secs == 0 {
            return Err(anyhow!("EFX_REFRESH_INTERVAL_SECS must be greater than zero"));
        }

        let currencies = match lookup("EFX_CURRENCIES") {
            Some(v) => v
                .parse::<CurrencyFilter>()
                .context("Invalid EFX_CURRENCIES")?,
            None => CurrencyFilter::only(DEFAULT_CURRENCIES),
        };
        let earliest_date = match lookup("EFX_EARLIEST_DATE") {
            Some(v) => parse_rate_date(v.trim()).context("Invalid EFX_EARLIEST_DATE")?,
            None => earliest_rate_date(),
        };

        let cors_allow = lookup("EFX_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = match lookup("EFX_REQUEST_TIMEOUT_MS") {
            Some(v) => v.trim().parse().context("Invalid EFX_REQUEST_TIMEOUT_MS")?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Ok(Self {
            listen_addr,
            historic_data,
            feed_url,
            refresh_interval: Duration::from_secs(refresh_secs),
            currencies,
            earliest_date,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            historic_data: DEFAULT_HISTORIC_DATA.into(),
            feed_url: DEFAULT_FEED_URL.to_string(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            currencies: CurrencyFilter::only(DEFAULT_CURRENCIES),
            earliest_date: earliest_rate_date(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}
