//! In-memory store implementation using dashmap.
//!
//! Used by the `memory` database provider for local development and by
//! tests. Data lives for the lifetime of the process.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use fitbattles_core::result::AppResult;
use fitbattles_core::traits::{AwardStore, ProfileStore};
use fitbattles_entity::award::{AwardRecord, NewAward};
use fitbattles_entity::profile::UserProfile;

/// Process-local profile and award store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Profiles keyed by identity ID.
    profiles: Arc<DashMap<Uuid, UserProfile>>,
    /// Award records per user, in append order.
    awards: Arc<DashMap<Uuid, Vec<AwardRecord>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Total number of award records across all users.
    pub fn award_count(&self) -> usize {
        self.awards.iter().map(|entry| entry.value().len()).sum()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn insert(&self, profile: &UserProfile) -> AppResult<bool> {
        match self.profiles.entry(profile.id) {
            Entry::Occupied(_) => {
                debug!(user_id = %profile.id, "Profile already present, keeping existing");
                Ok(false)
            }
            Entry::Vacant(slot) => {
                slot.insert(profile.clone());
                Ok(true)
            }
        }
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.get(&id).map(|entry| entry.value().clone()))
    }

    async fn set_delivery_token(&self, id: Uuid, token: &str) -> AppResult<bool> {
        match self.profiles.get_mut(&id) {
            Some(mut profile) => {
                profile.delivery_token = Some(token.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl AwardStore for MemoryStore {
    async fn append(&self, award: NewAward) -> AppResult<AwardRecord> {
        let record = award.into_record();
        self.awards
            .entry(record.user_id)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<AwardRecord>> {
        Ok(self
            .awards
            .get(&user_id)
            .map(|entry| entry.value().iter().rev().cloned().collect())
            .unwrap_or_default())
    }
}
