//! Sources of freshly published rate snapshots.

mod ecb;

pub use ecb::{EcbFeedClient, DEFAULT_FEED_URL};

use async_trait::async_trait;
use eurofx_core::Snapshot;

use crate::errors::FeedError;

/// Anything that can deliver the currently published snapshots.
///
/// The refresh scheduler only depends on this trait, so tests can feed it
/// canned data.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Short identifier used in log lines.
    fn id(&self) -> &str;

    /// Downloads and parses the feed.
    async fn fetch(&self) -> Result<Vec<Snapshot>, FeedError>;
}
