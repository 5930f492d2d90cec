//! Local portfolio cache.
//!
//! Mirrors the remote document in a single JSON file under a fixed
//! key. Reads are best-effort: missing or corrupt content is a cache
//! miss, never an error. Writes do fail loudly - a broken mirror is
//! worth surfacing.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use log::warn;

use crate::constants::PORTFOLIO_CACHE_FILE;
use crate::errors::{Result, StoreError};
use crate::portfolio::Portfolio;
use crate::store::PortfolioStore;

/// File-backed portfolio cache.
pub struct LocalPortfolioStore {
    path: PathBuf,
}

impl LocalPortfolioStore {
    /// Create a store backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store in the platform data directory.
    pub fn in_default_dir() -> Self {
        Self::new(default_data_dir().join(PORTFOLIO_CACHE_FILE))
    }
}

/// Platform data directory for the tracker, falling back to the
/// temporary directory when the platform reports none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("fundfolio")
}

#[async_trait]
impl PortfolioStore for LocalPortfolioStore {
    fn id(&self) -> &'static str {
        "LOCAL"
    }

    async fn load(&self, _user_id: &str) -> Result<Option<Portfolio>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                warn!(
                    "Failed to read portfolio cache {}: {}",
                    self.path.display(),
                    e
                );
                return Ok(None);
            }
        };

        match serde_json::from_str(&content) {
            Ok(portfolio) => Ok(Some(portfolio)),
            Err(e) => {
                warn!(
                    "Portfolio cache {} is corrupt ({}), treating as miss",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    async fn save(&self, _user_id: &str, portfolio: &Portfolio) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::from)?;
        }
        let content = serde_json::to_string_pretty(portfolio).map_err(StoreError::from)?;
        fs::write(&self.path, content).map_err(StoreError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{Fund, Sector};
    use rust_decimal_macros::dec;

    fn sample_portfolio() -> Portfolio {
        Portfolio {
            sectors: vec![Sector {
                id: 1,
                name: "Bond base".to_string(),
                color: "#1890ff".to_string(),
                target_ratio: dec!(35),
                funds: vec![Fund {
                    code: "163406".to_string(),
                    name: "Fund A".to_string(),
                    share: dec!(1000),
                    cost_nav: dec!(1.0),
                }],
            }],
            ..Portfolio::default()
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalPortfolioStore::new(dir.path().join("portfolio.json"));
        let portfolio = sample_portfolio();

        store.save("user_abc", &portfolio).await.unwrap();
        let loaded = store.load("user_abc").await.unwrap();

        assert_eq!(loaded, Some(portfolio));
    }

    #[tokio::test]
    async fn test_missing_file_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalPortfolioStore::new(dir.path().join("portfolio.json"));

        assert_eq!(store.load("user_abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        fs::write(&path, "{definitely not a portfolio").unwrap();

        let store = LocalPortfolioStore::new(path);
        assert_eq!(store.load("user_abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalPortfolioStore::new(dir.path().join("nested/dir/portfolio.json"));

        store.save("user_abc", &sample_portfolio()).await.unwrap();
        assert!(store.load("user_abc").await.unwrap().is_some());
    }
}
