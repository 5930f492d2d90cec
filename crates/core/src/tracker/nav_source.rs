//! Market-data crate adapter for the tracker.

use std::collections::HashMap;

use async_trait::async_trait;

use fundfolio_market_data::{IndexQuote, NavClient, NavEstimate, NavRecord};

use crate::errors::Result;
use crate::tracker::NavSourceTrait;

/// [`NavSourceTrait`] implementation backed by the market-data
/// [`NavClient`].
pub struct MarketDataNavSource {
    client: NavClient,
}

impl MarketDataNavSource {
    pub fn new(client: NavClient) -> Self {
        Self { client }
    }
}

impl Default for MarketDataNavSource {
    fn default() -> Self {
        Self::new(NavClient::new())
    }
}

#[async_trait]
impl NavSourceTrait for MarketDataNavSource {
    async fn nav_batch(&self, codes: &[String]) -> HashMap<String, NavRecord> {
        self.client.fetch_nav_batch(codes).await
    }

    async fn index_batch(&self, codes: &[String]) -> Vec<IndexQuote> {
        self.client.fetch_index_batch(codes).await
    }

    async fn estimate(&self, code: &str) -> Result<NavEstimate> {
        Ok(self.client.fetch_estimate(code).await?)
    }
}
