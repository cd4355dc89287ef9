//! Error types for the feed crate.

use thiserror::Error;

/// Errors that can occur while obtaining or decoding the rate feed.
///
/// None of these are fatal to the service: the cache keeps serving what it
/// already holds and the next scheduled refresh tries again.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The bootstrap document could not be opened or read.
    #[error("Failed to read feed: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a well-formed rate feed.
    #[error("Malformed feed document: {0}")]
    Parse(String),

    /// The publisher could not be reached or answered with an error status.
    #[error("Feed request to {url} failed: {message}")]
    Http {
        /// The feed URL that was requested
        url: String,
        /// Transport error or HTTP status
        message: String,
    },
}
