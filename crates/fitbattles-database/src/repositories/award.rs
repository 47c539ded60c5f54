//! Badge award repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fitbattles_core::error::{AppError, ErrorKind};
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::AwardStore;
use fitbattles_entity::award::{AwardRecord, NewAward};

/// PostgreSQL-backed, append-only award store.
#[derive(Debug, Clone)]
pub struct AwardRepository {
    pool: PgPool,
}

impl AwardRepository {
    /// Create a new award repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AwardStore for AwardRepository {
    async fn append(&self, award: NewAward) -> AppResult<AwardRecord> {
        sqlx::query_as::<_, AwardRecord>(
            "INSERT INTO badge_awards (id, user_id, badge_name, earned_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, badge_name, earned_at",
        )
        .bind(Uuid::new_v4())
        .bind(award.user_id)
        .bind(&award.badge_name)
        .bind(award.earned_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append award", e))
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<AwardRecord>> {
        sqlx::query_as::<_, AwardRecord>(
            "SELECT id, user_id, badge_name, earned_at FROM badge_awards \
             WHERE user_id = $1 ORDER BY earned_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list awards", e))
    }
}
