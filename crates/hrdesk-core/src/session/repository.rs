//! Session repository trait.

use super::model::User;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for the single current-session slot.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns the current session, if any.
    async fn load(&self) -> Result<Option<User>>;

    /// Replaces the current session.
    async fn save(&self, user: &User) -> Result<()>;

    /// Removes the current session. Succeeds when there is none.
    async fn clear(&self) -> Result<()>;
}
