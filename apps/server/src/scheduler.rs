//! Background scheduler for periodic rate refreshes.
//!
//! Published rates never change, so a refresh only ever adds new dates.
//! Failures are logged and retried on the next tick.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{info, warn};

use crate::main_lib::AppState;

/// Starts the background refresh loop.
///
/// The first refresh runs immediately when the cache is still empty (for
/// instance because the bootstrap document was missing), otherwise after one
/// full period.
pub fn start_refresh_scheduler(state: Arc<AppState>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Rate refresh scheduler started ({}s interval, source {})",
            period.as_secs(),
            state.feed_source.id()
        );

        let first_tick = match state.rates_service.is_ready() {
            Ok(true) => Instant::now() + period,
            Ok(false) => Instant::now(),
            Err(e) => {
                warn!("Unable to inspect rate cache, refreshing now: {}", e);
                Instant::now()
            }
        };
        let mut refresh_interval = interval_at(first_tick, period);
        refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            refresh_interval.tick().await;
            run_scheduled_refresh(&state).await;
        }
    })
}

/// Runs a single refresh. Returns the number of new dates, or `None` on failure.
pub async fn run_scheduled_refresh(state: &AppState) -> Option<usize> {
    let snapshots = match state.feed_source.fetch().await {
        Ok(snapshots) => snapshots,
        Err(e) => {
            warn!("Rate refresh from {} failed: {}", state.feed_source.id(), e);
            return None;
        }
    };

    match state.rates_service.ingest(snapshots) {
        Ok(inserted) => {
            info!("Rate refresh completed: {} new days", inserted);
            Some(inserted)
        }
        Err(e) => {
            warn!("Rate refresh could not update cache: {}", e);
            None
        }
    }
}
