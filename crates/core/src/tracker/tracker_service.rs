//! Tracker service.
//!
//! Wires the ranked store, the quote source, and the valuation engine
//! into the refresh flow: load the portfolio, poll NAVs for its funds,
//! aggregate. The engine itself stays a pure function; the service
//! never mutates a loaded portfolio.

use std::sync::Arc;

use log::{debug, info};

use fundfolio_market_data::{IndexQuote, NavEstimate};

use crate::errors::Result;
use crate::goals::GoalProgress;
use crate::portfolio::Portfolio;
use crate::store::PortfolioStore;
use crate::tracker::NavSourceTrait;
use crate::valuation::{aggregate_portfolio, PortfolioValuation};

pub struct TrackerService {
    store: Arc<dyn PortfolioStore>,
    nav_source: Arc<dyn NavSourceTrait>,
}

impl TrackerService {
    pub fn new(store: Arc<dyn PortfolioStore>, nav_source: Arc<dyn NavSourceTrait>) -> Self {
        TrackerService { store, nav_source }
    }

    /// Load the user's portfolio, falling back to the built-in default
    /// when no store has a document.
    pub async fn load_portfolio(&self, user_id: &str) -> Result<Portfolio> {
        match self.store.load(user_id).await? {
            Some(portfolio) => Ok(portfolio),
            None => {
                info!("No stored portfolio for user, starting from default");
                Ok(Portfolio::default())
            }
        }
    }

    /// Persist the user's portfolio.
    pub async fn save_portfolio(&self, user_id: &str, portfolio: &Portfolio) -> Result<()> {
        self.store.save(user_id, portfolio).await
    }

    /// Run one refresh pass: load, fetch NAVs, aggregate.
    ///
    /// Returns `None` when the portfolio holds no funds or when no
    /// fetch succeeded - there is nothing to report either way, and an
    /// empty pass must not look like a break-even one.
    pub async fn refresh(&self, user_id: &str) -> Result<Option<PortfolioValuation>> {
        let portfolio = self.load_portfolio(user_id).await?;
        if !portfolio.has_holdings() {
            debug!("Portfolio has no holdings, skipping fetch");
            return Ok(None);
        }

        let codes = portfolio.fund_codes();
        let records = self.nav_source.nav_batch(&codes).await;
        debug!("Fetched {}/{} NAV records", records.len(), codes.len());

        Ok(aggregate_portfolio(&portfolio, &records))
    }

    /// Run a refresh pass and derive goal progress from its totals.
    ///
    /// The asset value is zero when nothing could be valued.
    pub async fn refresh_with_goal(
        &self,
        user_id: &str,
    ) -> Result<(Option<PortfolioValuation>, GoalProgress)> {
        let portfolio = self.load_portfolio(user_id).await?;
        let valuation = if portfolio.has_holdings() {
            let codes = portfolio.fund_codes();
            let records = self.nav_source.nav_batch(&codes).await;
            aggregate_portfolio(&portfolio, &records)
        } else {
            None
        };

        let current_asset = valuation
            .as_ref()
            .map(|v| v.total_asset)
            .unwrap_or_default();
        let progress = GoalProgress::compute(&portfolio, current_asset);

        Ok((valuation, progress))
    }

    /// Fetch the watchlist index quotes.
    pub async fn index_overview(&self, codes: &[String]) -> Vec<IndexQuote> {
        self.nav_source.index_batch(codes).await
    }

    /// Fetch an intraday estimate for one fund.
    pub async fn estimate(&self, code: &str) -> Result<NavEstimate> {
        self.nav_source.estimate(code).await
    }
}
