//! Core error types.
//!
//! Storage-specific failures are wrapped as [`StoreError`]; market data
//! failures come from the market-data crate unchanged.

use thiserror::Error;

use fundfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tracker core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors from the persistence layer.
///
/// Read-side callers treat these as "try the next store"; write-side
/// callers surface them without blocking in-memory work.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store could not be reached or refused the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The requested document was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The stored document could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
