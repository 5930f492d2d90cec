//! Ranked composite store.
//!
//! Stores are tried in priority order (remote first, then local). On
//! read the first document found wins and is mirrored down to every
//! lower-priority store so the cache tracks the authoritative copy. A
//! store that errors is skipped - the next rank gets its chance.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::errors::Result;
use crate::portfolio::Portfolio;
use crate::store::PortfolioStore;

/// Priority-ordered chain of portfolio stores.
pub struct RankedPortfolioStore {
    stores: Vec<Arc<dyn PortfolioStore>>,
}

impl RankedPortfolioStore {
    /// Create a chain from highest to lowest priority.
    pub fn new(stores: Vec<Arc<dyn PortfolioStore>>) -> Self {
        Self { stores }
    }
}

#[async_trait]
impl PortfolioStore for RankedPortfolioStore {
    fn id(&self) -> &'static str {
        "RANKED"
    }

    async fn load(&self, user_id: &str) -> Result<Option<Portfolio>> {
        for (rank, store) in self.stores.iter().enumerate() {
            match store.load(user_id).await {
                Ok(Some(portfolio)) => {
                    // Mirror the winning document to every lower rank,
                    // best-effort.
                    for lower in &self.stores[rank + 1..] {
                        if let Err(e) = lower.save(user_id, &portfolio).await {
                            warn!("Failed to mirror portfolio to {}: {}", lower.id(), e);
                        }
                    }
                    return Ok(Some(portfolio));
                }
                Ok(None) => continue,
                Err(e) => {
                    warn!("Store {} failed to load, trying next: {}", store.id(), e);
                }
            }
        }
        Ok(None)
    }

    async fn save(&self, user_id: &str, portfolio: &Portfolio) -> Result<()> {
        let mut first_error = None;

        // Every rank is attempted even when an earlier one fails; the
        // first error is surfaced afterwards.
        for store in &self.stores {
            if let Err(e) = store.save(user_id, portfolio).await {
                warn!("Store {} failed to save: {}", store.id(), e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
