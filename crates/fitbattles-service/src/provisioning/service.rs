//! Signup: create the identity, then the profile keyed by its ID.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;
use validator::ValidateEmail;

use fitbattles_core::error::{AppError, ErrorKind};
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::{IdentityProvider, ProfileStore};
use fitbattles_entity::profile::UserProfile;

/// Creates users and reads their profiles.
#[derive(Debug, Clone)]
pub struct ProvisioningService {
    /// Identity backend.
    identities: Arc<dyn IdentityProvider>,
    /// Profile store.
    profiles: Arc<dyn ProfileStore>,
}

impl ProvisioningService {
    /// Creates a new provisioning service.
    pub fn new(identities: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            identities,
            profiles,
        }
    }

    /// Registers a new user and writes their initial profile.
    ///
    /// The profile write is insert-if-absent, so repeating it for the same
    /// identity keeps the first profile. If the identity is created but the
    /// profile write fails, the identity is left in place and the error is
    /// reported as `ProfilePersist`.
    pub async fn sign_up(&self, email: &str, password: &str) -> AppResult<UserProfile> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if !email.validate_email() {
            return Err(AppError::validation("Invalid email format"));
        }

        let user_id = self
            .identities
            .create_identity(email, password)
            .await
            .map_err(|e| e.recast(ErrorKind::IdentityCreation))?;

        let profile = UserProfile::new_for_identity(user_id, email);

        let inserted = match self.profiles.insert(&profile).await {
            Ok(inserted) => inserted,
            Err(e) => {
                warn!(
                    user_id = %user_id,
                    identity_backend = self.identities.name(),
                    error = %e,
                    "Identity created but profile write failed"
                );
                return Err(e.recast(ErrorKind::ProfilePersist));
            }
        };

        if !inserted {
            info!(user_id = %user_id, "Profile already present, keeping existing");
            return self.get_profile(user_id).await;
        }

        info!(user_id = %user_id, username = %profile.username, "User signed up");
        Ok(profile)
    }

    /// Gets a profile by user ID.
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<UserProfile> {
        self.profiles
            .find(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
