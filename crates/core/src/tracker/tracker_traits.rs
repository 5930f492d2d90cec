//! Trait for the tracker's view of the market-data layer.

use std::collections::HashMap;

use async_trait::async_trait;

use fundfolio_market_data::{IndexQuote, NavEstimate, NavRecord};

use crate::errors::Result;

/// Quote/NAV source as the tracker sees it.
///
/// Batch methods return partial results: codes whose fetch failed are
/// simply absent. Downstream aggregation omits those funds.
#[async_trait]
pub trait NavSourceTrait: Send + Sync {
    /// Fetch NAV records for the given fund codes.
    async fn nav_batch(&self, codes: &[String]) -> HashMap<String, NavRecord>;

    /// Fetch quotes for the given index codes, in input order.
    async fn index_batch(&self, codes: &[String]) -> Vec<IndexQuote>;

    /// Fetch an intraday NAV estimate for one fund.
    async fn estimate(&self, code: &str) -> Result<NavEstimate>;
}
