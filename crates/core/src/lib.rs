//! EuroFX Core - Domain entities, the rate cache and its lookup service.
//!
//! This crate holds everything that decides *which* rates are served for a
//! requested date. It performs no I/O: snapshots are handed to it by the feed
//! crate and read back by the server crate.

pub mod constants;
pub mod errors;
pub mod rates;
pub mod utils;

// Re-export the rates domain
pub use rates::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
