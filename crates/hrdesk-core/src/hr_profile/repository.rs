//! HR profile repository trait.

use super::model::HrProfile;
use crate::error::Result;
use async_trait::async_trait;

/// Single-slot storage for the HR profile.
#[async_trait]
pub trait HrProfileRepository: Send + Sync {
    /// Returns the stored profile, or `None` if it was never saved.
    async fn get(&self) -> Result<Option<HrProfile>>;

    /// Replaces the stored profile.
    async fn save(&self, profile: &HrProfile) -> Result<()>;
}
