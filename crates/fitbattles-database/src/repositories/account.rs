//! Account (credential) repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fitbattles_core::error::{AppError, ErrorKind};
use fitbattles_core::result::AppResult;
use fitbattles_entity::identity::Account;

/// Repository for identity credential rows.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new account with a pre-hashed password.
    pub async fn create(&self, email: &str, password_hash: &str) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (id, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict("Email already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }
}
