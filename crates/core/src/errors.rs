//! Core error types for the EuroFX service.
//!
//! Lookup failures live in [`RatesError`]; the root [`Error`] adds the
//! failures that can only happen while wiring the service together.

use thiserror::Error;

use crate::rates::RatesError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Rates(#[from] RatesError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}
