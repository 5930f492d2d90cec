//! Storage trait for portfolio documents.

use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolio::Portfolio;

/// A backing store holding one portfolio document per user id.
///
/// An absent document is `Ok(None)`, never an error: a fresh user has
/// no document anywhere. Errors mean the store itself misbehaved.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Identifier for logging (e.g. "LOCAL", "REMOTE").
    fn id(&self) -> &'static str;

    /// Load the document for a user.
    async fn load(&self, user_id: &str) -> Result<Option<Portfolio>>;

    /// Save the document for a user, replacing any previous version.
    async fn save(&self, user_id: &str, portfolio: &Portfolio) -> Result<()>;
}
