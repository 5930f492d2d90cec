//! NAV client - batch facade over the providers.
//!
//! Fetches are issued strictly sequentially with a fixed inter-call
//! spacing; there is no concurrent dispatch. A failed item is logged
//! and omitted from the batch result — the batch always continues, and
//! nothing is retried within a pass.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use log::warn;

use crate::errors::MarketDataError;
use crate::models::{IndexQuote, NavEstimate, NavRecord};
use crate::provider::{EastMoneyProvider, NavProvider, TtFundProvider};
use crate::registry::RateLimiter;

/// Spacing between index quote polls.
pub const INDEX_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Spacing between fund NAV polls.
pub const NAV_POLL_INTERVAL: Duration = Duration::from_millis(300);

/// Spacing between intraday estimate polls.
pub const ESTIMATE_POLL_INTERVAL: Duration = Duration::from_millis(300);

/// Batch client for fund and index data.
///
/// Owns the providers and the pacing state. Batch helpers implement
/// the partial-failure policy: codes whose fetch fails are absent from
/// the result, which downstream aggregation treats as "omit this fund"
/// rather than an error.
pub struct NavClient {
    nav_provider: Arc<dyn NavProvider>,
    index_provider: Arc<dyn NavProvider>,
    estimate_provider: Arc<dyn NavProvider>,
    limiter: RateLimiter,
}

impl NavClient {
    /// Create a client with the default provider set: EastMoney for
    /// NAV history and index quotes, TTFund for intraday estimates.
    pub fn new() -> Self {
        let eastmoney: Arc<dyn NavProvider> = Arc::new(EastMoneyProvider::new());
        Self {
            nav_provider: eastmoney.clone(),
            index_provider: eastmoney,
            estimate_provider: Arc::new(TtFundProvider::new()),
            limiter: RateLimiter::new(),
        }
    }

    /// Create a client with explicit providers.
    pub fn with_providers(
        nav_provider: Arc<dyn NavProvider>,
        index_provider: Arc<dyn NavProvider>,
        estimate_provider: Arc<dyn NavProvider>,
    ) -> Self {
        Self {
            nav_provider,
            index_provider,
            estimate_provider,
            limiter: RateLimiter::new(),
        }
    }

    /// Fetch NAV records for a batch of fund codes.
    ///
    /// Returns a map keyed by code containing only the funds whose
    /// fetch succeeded. Duplicate codes are fetched once.
    pub async fn fetch_nav_batch(&self, codes: &[String]) -> HashMap<String, NavRecord> {
        let key = format!("{}:nav", self.nav_provider.id());
        let mut records = HashMap::new();

        for code in codes {
            if records.contains_key(code) {
                continue;
            }
            self.limiter.acquire(&key, NAV_POLL_INTERVAL).await;
            match self.nav_provider.fetch_nav(code).await {
                Ok(record) => {
                    records.insert(code.clone(), record);
                }
                Err(e) => {
                    warn!("Failed to fetch NAV for fund {}: {}", code, e);
                }
            }
        }

        records
    }

    /// Fetch quotes for a batch of index codes, preserving input order.
    ///
    /// Failed codes are omitted from the result.
    pub async fn fetch_index_batch(&self, codes: &[String]) -> Vec<IndexQuote> {
        let key = format!("{}:index", self.index_provider.id());
        let mut quotes = Vec::with_capacity(codes.len());

        for code in codes {
            self.limiter.acquire(&key, INDEX_POLL_INTERVAL).await;
            match self.index_provider.fetch_index_quote(code).await {
                Ok(quote) => quotes.push(quote),
                Err(e) => {
                    warn!("Failed to fetch index quote for {}: {}", code, e);
                }
            }
        }

        quotes
    }

    /// Fetch an intraday NAV estimate for a single fund.
    pub async fn fetch_estimate(&self, code: &str) -> Result<NavEstimate, MarketDataError> {
        let key = format!("{}:estimate", self.estimate_provider.id());
        self.limiter.acquire(&key, ESTIMATE_POLL_INTERVAL).await;
        self.estimate_provider.fetch_estimate(code).await
    }
}

impl Default for NavClient {
    fn default() -> Self {
        Self::new()
    }
}
