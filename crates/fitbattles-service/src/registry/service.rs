//! Delivery token updates.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use fitbattles_core::error::{AppError, ErrorKind};
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::ProfileStore;

/// Records the device token push messages are addressed to.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    profiles: Arc<dyn ProfileStore>,
}

impl TokenRegistry {
    /// Creates a new token registry.
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Replaces the user's delivery token.
    ///
    /// Last write wins; concurrent updates are not serialized.
    pub async fn update_delivery_token(&self, user_id: Uuid, token: &str) -> AppResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::validation("Delivery token is required"));
        }

        let updated = self
            .profiles
            .set_delivery_token(user_id, token)
            .await
            .map_err(|e| e.recast(ErrorKind::Persist))?;

        if !updated {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id = %user_id, "Delivery token updated");
        Ok(())
    }
}
