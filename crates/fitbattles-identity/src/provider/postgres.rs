//! PostgreSQL-backed identity provider.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use fitbattles_core::config::IdentityConfig;
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::IdentityProvider;
use fitbattles_database::repositories::AccountRepository;

use crate::password::{PasswordHasher, PasswordValidator};

/// Stores credentials in the `accounts` table with Argon2id hashes.
#[derive(Debug, Clone)]
pub struct PostgresIdentityProvider {
    accounts: AccountRepository,
    hasher: PasswordHasher,
    validator: PasswordValidator,
}

impl PostgresIdentityProvider {
    /// Creates a new provider over the given pool.
    pub fn new(pool: PgPool, config: &IdentityConfig) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
            hasher: PasswordHasher::new(),
            validator: PasswordValidator::new(config),
        }
    }
}

#[async_trait]
impl IdentityProvider for PostgresIdentityProvider {
    async fn create_identity(&self, email: &str, password: &str) -> AppResult<Uuid> {
        self.validator.validate(password)?;

        let hash = self.hasher.hash_password_blocking(password).await?;

        // The unique index on LOWER(email) still decides races between
        // concurrent signups; `create` maps that violation to Conflict.
        let account = self.accounts.create(email, &hash).await?;

        info!(account_id = %account.id, "Identity created");
        Ok(account.id)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
