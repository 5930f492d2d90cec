//! Settings service - user identity management.
//!
//! The tracker has no accounts or authentication; a client-generated
//! opaque id keys the user's document in the remote store. Users can
//! copy the id to another device to share one portfolio.

use std::sync::Arc;

use log::info;
use uuid::Uuid;

use crate::constants::{USER_ID_KEY, USER_ID_PREFIX};
use crate::errors::{Error, Result};
use crate::settings::SettingsRepositoryTrait;

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }

    /// Return the stored user id, generating and persisting a fresh
    /// one on first use.
    pub async fn get_or_create_user_id(&self) -> Result<String> {
        if let Some(user_id) = self.settings_repository.get_setting(USER_ID_KEY)? {
            return Ok(user_id);
        }

        let user_id = generate_user_id();
        info!("Generated new user id");
        self.settings_repository
            .set_setting(USER_ID_KEY, &user_id)
            .await?;
        Ok(user_id)
    }

    /// Replace the user id with one supplied by the user (e.g. copied
    /// from another device).
    pub async fn set_user_id(&self, user_id: &str) -> Result<()> {
        let trimmed = user_id.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation("user id must not be empty".to_string()));
        }
        self.settings_repository
            .set_setting(USER_ID_KEY, trimmed)
            .await
    }

    /// Discard the current user id and generate a fresh one.
    pub async fn reset_user_id(&self) -> Result<String> {
        let user_id = generate_user_id();
        self.settings_repository
            .set_setting(USER_ID_KEY, &user_id)
            .await?;
        Ok(user_id)
    }
}

/// Generate an opaque, client-side user id.
fn generate_user_id() -> String {
    format!("{}{}", USER_ID_PREFIX, Uuid::new_v4().simple())
}
