//! Document store traits for profiles and award records.

use async_trait::async_trait;
use uuid::Uuid;

use fitbattles_entity::award::{AwardRecord, NewAward};
use fitbattles_entity::profile::UserProfile;

use crate::result::AppResult;

/// Profile storage keyed by identity ID.
#[async_trait]
pub trait ProfileStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a profile unless one already exists for its ID.
    ///
    /// Returns `true` if the profile was written, `false` if a profile
    /// with the same ID was already present (the existing one is kept).
    async fn insert(&self, profile: &UserProfile) -> AppResult<bool>;

    /// Find a profile by ID.
    async fn find(&self, id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Overwrite the delivery token of an existing profile.
    ///
    /// Returns `false` if no profile has the given ID.
    async fn set_delivery_token(&self, id: Uuid, token: &str) -> AppResult<bool>;
}

/// Append-only award record storage.
#[async_trait]
pub trait AwardStore: Send + Sync + std::fmt::Debug + 'static {
    /// Append a new award record and return it.
    async fn append(&self, award: NewAward) -> AppResult<AwardRecord>;

    /// List a user's awards, newest first.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<AwardRecord>>;
}
