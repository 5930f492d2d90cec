//! Provider trait definition.
//!
//! Each endpoint family (end-of-day NAV, index quote, intraday
//! estimate) is a distinct operation; providers implement only the
//! operations their endpoints cover and inherit `NotSupported` for the
//! rest.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{IndexQuote, NavEstimate, NavRecord};

/// Trait for fund and index data providers.
///
/// Implement this trait to add a new data source. All operations are
/// per-code and fail per-item: the batch layer decides what to do with
/// a failure (it logs and omits the item).
#[async_trait]
pub trait NavProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// A constant string like "EASTMONEY" or "TTFUND", used for
    /// logging and rate-limiter keying.
    fn id(&self) -> &'static str;

    /// Fetch the latest published NAV pair for a fund.
    ///
    /// Returns the latest NAV together with the prior trading day's
    /// NAV, or a `MarketDataError` on failure.
    async fn fetch_nav(&self, code: &str) -> Result<NavRecord, MarketDataError> {
        let _ = code;
        Err(MarketDataError::NotSupported {
            operation: "nav".to_string(),
            provider: self.id().to_string(),
        })
    }

    /// Fetch the latest quote for a market index.
    async fn fetch_index_quote(&self, code: &str) -> Result<IndexQuote, MarketDataError> {
        let _ = code;
        Err(MarketDataError::NotSupported {
            operation: "index_quote".to_string(),
            provider: self.id().to_string(),
        })
    }

    /// Fetch an intraday NAV estimate for a fund.
    async fn fetch_estimate(&self, code: &str) -> Result<NavEstimate, MarketDataError> {
        let _ = code;
        Err(MarketDataError::NotSupported {
            operation: "estimate".to_string(),
            provider: self.id().to_string(),
        })
    }
}
