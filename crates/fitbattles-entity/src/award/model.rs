//! Badge award entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An append-only record that a user earned a badge.
///
/// Records are never updated or deleted. The same badge may be
/// recorded more than once for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AwardRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The user who earned the badge.
    pub user_id: Uuid,
    /// Badge name as supplied by the caller.
    pub badge_name: String,
    /// When the badge was earned.
    pub earned_at: DateTime<Utc>,
}

/// Data required to append a new award record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAward {
    /// The user who earned the badge.
    pub user_id: Uuid,
    /// Badge name.
    pub badge_name: String,
    /// When the badge was earned.
    pub earned_at: DateTime<Utc>,
}

impl NewAward {
    /// Create an award stamped with the current time.
    pub fn now(user_id: Uuid, badge_name: impl Into<String>) -> Self {
        Self {
            user_id,
            badge_name: badge_name.into(),
            earned_at: Utc::now(),
        }
    }

    /// Materialize the record with a fresh identifier.
    pub fn into_record(self) -> AwardRecord {
        AwardRecord {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            badge_name: self.badge_name,
            earned_at: self.earned_at,
        }
    }
}
