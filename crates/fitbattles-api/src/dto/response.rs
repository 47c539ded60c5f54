//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fitbattles_entity::profile::UserProfile;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Signup result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    /// New user's ID.
    pub id: Uuid,
    /// Username derived from the email.
    pub username: String,
    pub message: String,
}

/// Public view of a profile. The delivery token is reduced to a flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub profile_image_url: String,
    pub points: i64,
    pub friends: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub has_delivery_token: bool,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let has_delivery_token = profile.active_delivery_token().is_some();
        Self {
            id: profile.id,
            email: profile.email,
            username: profile.username,
            profile_image_url: profile.avatar_url,
            points: profile.points,
            friends: profile.friends,
            created_at: profile.created_at,
            has_delivery_token,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
    /// `connected`, `unavailable`, or `memory`.
    pub database: String,
    /// Push backend name.
    pub push: String,
}
