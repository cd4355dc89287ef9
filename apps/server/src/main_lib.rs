use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use eurofx_core::{RateCache, RatesService, RatesServiceTrait};
use eurofx_feed::{load_file, EcbFeedClient, FeedSource};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub rates_service: Arc<dyn RatesServiceTrait + Send + Sync>,
    /// Source polled by the refresh scheduler
    pub feed_source: Arc<dyn FeedSource>,
}

impl AppState {
    pub fn new(
        rates_service: Arc<dyn RatesServiceTrait + Send + Sync>,
        feed_source: Arc<dyn FeedSource>,
    ) -> Self {
        Self {
            rates_service,
            feed_source,
        }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("EFX_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the shared cache and seeds it from the historical document.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let cache = Arc::new(RateCache::new(config.earliest_date));
    let rates_service = Arc::new(RatesService::new(cache, config.currencies.clone()));
    bootstrap(rates_service.as_ref(), &config.historic_data);

    let feed_source = Arc::new(EcbFeedClient::new(config.feed_url.clone()));
    Arc::new(AppState::new(rates_service, feed_source))
}

/// Loads the historical document into the cache.
///
/// A missing or unreadable document is not fatal: the service starts empty
/// and the first scheduled refresh fills it.
pub fn bootstrap(rates_service: &dyn RatesServiceTrait, path: &Path) -> usize {
    let snapshots = match load_file(path) {
        Ok(snapshots) => snapshots,
        Err(e) => {
            tracing::error!("Unable to populate cache from {}: {}", path.display(), e);
            return 0;
        }
    };

    match rates_service.ingest(snapshots) {
        Ok(inserted) => {
            match rates_service.latest_date() {
                Ok(latest) => tracing::info!(
                    "Loaded {} days of rates from {} (latest {:?})",
                    inserted,
                    path.display(),
                    latest
                ),
                Err(e) => tracing::error!("Rate cache unreadable after bootstrap: {}", e),
            }
            inserted
        }
        Err(e) => {
            tracing::error!("Unable to populate cache from {}: {}", path.display(), e);
            0
        }
    }
}
