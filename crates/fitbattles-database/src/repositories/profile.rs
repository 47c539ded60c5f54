//! User profile repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fitbattles_core::error::{AppError, ErrorKind};
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::ProfileStore;
use fitbattles_entity::profile::UserProfile;

const PROFILE_COLUMNS: &str =
    "id, email, username, avatar_url, points, friends, created_at, delivery_token";

/// PostgreSQL-backed profile store.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn insert(&self, profile: &UserProfile) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO user_profiles \
                (id, email, username, avatar_url, points, friends, created_at, delivery_token) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(profile.id)
        .bind(&profile.email)
        .bind(&profile.username)
        .bind(&profile.avatar_url)
        .bind(profile.points)
        .bind(&profile.friends)
        .bind(profile.created_at)
        .bind(&profile.delivery_token)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert profile", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    async fn set_delivery_token(&self, id: Uuid, token: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE user_profiles SET delivery_token = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update delivery token", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
