//! In-memory identity provider for development and tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use fitbattles_core::config::IdentityConfig;
use fitbattles_core::error::AppError;
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::IdentityProvider;
use fitbattles_entity::identity::Account;

use crate::password::{PasswordHasher, PasswordValidator};

/// Keeps accounts in a concurrent map keyed by lowercased email.
#[derive(Debug, Clone)]
pub struct MemoryIdentityProvider {
    accounts: Arc<DashMap<String, Account>>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
}

impl MemoryIdentityProvider {
    /// Creates an empty provider.
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            accounts: Arc::new(DashMap::new()),
            hasher: PasswordHasher::new(),
            validator: PasswordValidator::new(config),
        }
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Checks a password against the stored hash for `email`.
    pub fn verify(&self, email: &str, password: &str) -> AppResult<bool> {
        match self.accounts.get(&email.to_lowercase()) {
            Some(account) => self.hasher.verify_password(password, &account.password_hash),
            None => Ok(false),
        }
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn create_identity(&self, email: &str, password: &str) -> AppResult<Uuid> {
        self.validator.validate(password)?;

        let key = email.to_lowercase();
        if self.accounts.contains_key(&key) {
            return Err(AppError::conflict("Email already in use"));
        }

        let hash = self.hasher.hash_password_blocking(password).await?;

        match self.accounts.entry(key) {
            Entry::Occupied(_) => Err(AppError::conflict("Email already in use")),
            Entry::Vacant(slot) => {
                let account = Account {
                    id: Uuid::new_v4(),
                    email: email.to_string(),
                    password_hash: hash,
                    created_at: Utc::now(),
                };
                let id = account.id;
                slot.insert(account);
                debug!(account_id = %id, "Identity created in memory");
                Ok(id)
            }
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
