//! File-backed settings repository.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use log::warn;

use crate::errors::Result;
use crate::settings::SettingsRepositoryTrait;

/// Settings stored as a flat JSON object in a single file.
///
/// Reads are best-effort: a missing or corrupt file behaves like an
/// empty settings document.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    /// Create a repository backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return BTreeMap::new(),
        };
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                warn!(
                    "Settings file {} is corrupt ({}), treating as empty",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
        }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for FileSettingsRepository {
    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all().get(key).cloned())
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        let mut settings = self.read_all();
        settings.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(crate::errors::StoreError::from)?;
        }
        let content =
            serde_json::to_string_pretty(&settings).map_err(crate::errors::StoreError::from)?;
        fs::write(&self.path, content).map_err(crate::errors::StoreError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));

        repo.set_setting("userId", "user_abc").await.unwrap();
        assert_eq!(
            repo.get_setting("userId").unwrap(),
            Some("user_abc".to_string())
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));

        assert_eq!(repo.get_setting("userId").unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let repo = FileSettingsRepository::new(path);
        assert_eq!(repo.get_setting("userId").unwrap(), None);

        // A write replaces the corrupt document.
        repo.set_setting("userId", "user_abc").await.unwrap();
        assert_eq!(
            repo.get_setting("userId").unwrap(),
            Some("user_abc".to_string())
        );
    }
}
