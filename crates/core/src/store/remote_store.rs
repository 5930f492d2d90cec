//! Remote portfolio store.
//!
//! Talks to a managed REST table (PostgREST-style) holding one row per
//! user: `{user_id, data, updated_at}`. The backend is addressed by an
//! opaque user id; there is no authentication beyond the project API
//! key.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::constants::REMOTE_TABLE;
use crate::errors::{Result, StoreError};
use crate::portfolio::Portfolio;
use crate::store::PortfolioStore;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One table row per user.
#[derive(Debug, Serialize)]
struct PortfolioRow<'a> {
    user_id: &'a str,
    data: &'a Portfolio,
    updated_at: DateTime<Utc>,
}

/// Read projection: only the document column is selected.
#[derive(Debug, Deserialize)]
struct PortfolioRowData {
    data: Portfolio,
}

/// REST-backed portfolio store.
pub struct RemotePortfolioStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RemotePortfolioStore {
    /// Create a store against the given project base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, REMOTE_TABLE)
    }

    fn unavailable(e: reqwest::Error) -> StoreError {
        if e.is_timeout() {
            StoreError::Unavailable("request timed out".to_string())
        } else {
            StoreError::Unavailable(e.to_string())
        }
    }
}

#[async_trait]
impl PortfolioStore for RemotePortfolioStore {
    fn id(&self) -> &'static str {
        "REMOTE"
    }

    async fn load(&self, user_id: &str) -> Result<Option<Portfolio>> {
        let response = self
            .client
            .get(self.table_url())
            .query(&[("user_id", format!("eq.{}", user_id)), ("select", "data".to_string())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(Self::unavailable)?;

        if !response.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "load returned HTTP {}",
                response.status()
            ))
            .into());
        }

        let body = response.text().await.map_err(Self::unavailable)?;
        let mut rows: Vec<PortfolioRowData> =
            serde_json::from_str(&body).map_err(StoreError::from)?;

        // No row for this user id: a fresh user, not an error.
        Ok(rows.pop().map(|row| row.data))
    }

    async fn save(&self, user_id: &str, portfolio: &Portfolio) -> Result<()> {
        let row = PortfolioRow {
            user_id,
            data: portfolio,
            updated_at: Utc::now(),
        };

        let response = self
            .client
            .post(self.table_url())
            .query(&[("on_conflict", "user_id")])
            .header("apikey", &self.api_key)
            .header("Prefer", "resolution=merge-duplicates")
            .bearer_auth(&self.api_key)
            .json(&[row])
            .send()
            .await
            .map_err(Self::unavailable)?;

        if !response.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "save returned HTTP {}",
                response.status()
            ))
            .into());
        }

        Ok(())
    }
}
