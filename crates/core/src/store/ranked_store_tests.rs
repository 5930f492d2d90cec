use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal_macros::dec;

use crate::errors::{Result, StoreError};
use crate::portfolio::Portfolio;
use crate::store::{PortfolioStore, RankedPortfolioStore};

/// In-memory store with switchable failure modes.
#[derive(Default)]
struct MockStore {
    document: Mutex<Option<Portfolio>>,
    fail_on_load: bool,
    fail_on_save: bool,
    saves: Mutex<u32>,
}

impl MockStore {
    fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn with_document(portfolio: Portfolio) -> Arc<Self> {
        Arc::new(Self {
            document: Mutex::new(Some(portfolio)),
            ..Self::default()
        })
    }

    fn failing_load() -> Arc<Self> {
        Arc::new(Self {
            fail_on_load: true,
            ..Self::default()
        })
    }

    fn failing_save() -> Arc<Self> {
        Arc::new(Self {
            fail_on_save: true,
            ..Self::default()
        })
    }

    fn document(&self) -> Option<Portfolio> {
        self.document.lock().unwrap().clone()
    }

    fn save_count(&self) -> u32 {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl PortfolioStore for MockStore {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn load(&self, _user_id: &str) -> Result<Option<Portfolio>> {
        if self.fail_on_load {
            return Err(StoreError::Unavailable("intentional load failure".to_string()).into());
        }
        Ok(self.document())
    }

    async fn save(&self, _user_id: &str, portfolio: &Portfolio) -> Result<()> {
        *self.saves.lock().unwrap() += 1;
        if self.fail_on_save {
            return Err(StoreError::Unavailable("intentional save failure".to_string()).into());
        }
        *self.document.lock().unwrap() = Some(portfolio.clone());
        Ok(())
    }
}

fn marked_portfolio(months: u32) -> Portfolio {
    Portfolio {
        total_goal: dec!(700000),
        months,
        sectors: Vec::new(),
    }
}

#[tokio::test]
async fn test_first_store_wins() {
    let remote = MockStore::with_document(marked_portfolio(11));
    let local = MockStore::with_document(marked_portfolio(22));
    let ranked = RankedPortfolioStore::new(vec![remote, local.clone()]);

    let loaded = ranked.load("user_abc").await.unwrap().unwrap();
    assert_eq!(loaded.months, 11);
}

#[tokio::test]
async fn test_winning_read_is_mirrored_to_lower_ranks() {
    let remote = MockStore::with_document(marked_portfolio(11));
    let local = MockStore::empty();
    let ranked = RankedPortfolioStore::new(vec![remote, local.clone()]);

    ranked.load("user_abc").await.unwrap();

    assert_eq!(local.document().unwrap().months, 11);
}

#[tokio::test]
async fn test_erroring_store_falls_through() {
    let remote = MockStore::failing_load();
    let local = MockStore::with_document(marked_portfolio(22));
    let ranked = RankedPortfolioStore::new(vec![remote, local]);

    let loaded = ranked.load("user_abc").await.unwrap().unwrap();
    assert_eq!(loaded.months, 22);
}

#[tokio::test]
async fn test_missing_everywhere_is_a_miss() {
    let ranked = RankedPortfolioStore::new(vec![MockStore::empty(), MockStore::empty()]);
    assert!(ranked.load("user_abc").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mirror_failure_does_not_block_read() {
    let remote = MockStore::with_document(marked_portfolio(11));
    let local = MockStore::failing_save();
    let ranked = RankedPortfolioStore::new(vec![remote, local]);

    let loaded = ranked.load("user_abc").await.unwrap();
    assert!(loaded.is_some());
}

#[tokio::test]
async fn test_save_writes_every_rank() {
    let remote = MockStore::empty();
    let local = MockStore::empty();
    let ranked = RankedPortfolioStore::new(vec![remote.clone(), local.clone()]);

    ranked.save("user_abc", &marked_portfolio(11)).await.unwrap();

    assert_eq!(remote.document().unwrap().months, 11);
    assert_eq!(local.document().unwrap().months, 11);
}

#[tokio::test]
async fn test_save_surfaces_error_but_attempts_all_ranks() {
    let remote = MockStore::failing_save();
    let local = MockStore::empty();
    let ranked = RankedPortfolioStore::new(vec![remote.clone(), local.clone()]);

    let result = ranked.save("user_abc", &marked_portfolio(11)).await;

    assert!(result.is_err());
    // The local mirror was still written.
    assert_eq!(remote.save_count(), 1);
    assert_eq!(local.document().unwrap().months, 11);
}
