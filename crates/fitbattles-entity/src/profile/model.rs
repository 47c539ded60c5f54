//! User profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The public profile document created for every provisioned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Identifier assigned by the identity backend.
    pub id: Uuid,
    /// Email address used at signup.
    pub email: String,
    /// Display handle, defaults to the local-part of the email.
    pub username: String,
    /// Avatar image URL (empty until the user uploads one).
    pub avatar_url: String,
    /// Accumulated points.
    pub points: i64,
    /// IDs of befriended users.
    pub friends: Vec<Uuid>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// Push delivery token of the user's current device.
    pub delivery_token: Option<String>,
}

impl UserProfile {
    /// Build the initial profile for a freshly created identity.
    pub fn new_for_identity(id: Uuid, email: &str) -> Self {
        Self {
            id,
            email: email.to_string(),
            username: username_from_email(email).to_string(),
            avatar_url: String::new(),
            points: 0,
            friends: Vec::new(),
            created_at: Utc::now(),
            delivery_token: None,
        }
    }

    /// Return the delivery token if one is set and non-empty.
    pub fn active_delivery_token(&self) -> Option<&str> {
        self.delivery_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

/// Derive the default username: everything before the first `@`.
pub fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
