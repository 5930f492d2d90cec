//! Repository trait for settings storage.

use async_trait::async_trait;

use crate::errors::Result;

/// Key-value storage for settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key. Returns None if not found.
    fn get_setting(&self, key: &str) -> Result<Option<String>>;

    /// Set a single setting value by key.
    async fn set_setting(&self, key: &str, value: &str) -> Result<()>;
}
