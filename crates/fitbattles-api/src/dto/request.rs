//! Request DTOs with validation.
//!
//! Field names are camelCase on the wire to match existing mobile clients.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Longest badge name accepted, in characters.
pub const MAX_BADGE_NAME_LEN: usize = 200;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Login email.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Password; policy is enforced by the identity backend.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Delivery token update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTokenRequest {
    /// Profile ID.
    pub user_id: String,
    /// Device delivery token.
    #[validate(length(min = 1, message = "fcmToken is required"))]
    pub fcm_token: String,
}

/// Badge award body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AwardBadgeRequest {
    /// Profile ID.
    pub user_id: String,
    /// Badge name.
    #[validate(
        length(min = 1, message = "badgeName is required"),
        custom(function = "validate_badge_name_len")
    )]
    pub badge_name: String,
}

/// Direct notification body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendNotificationRequest {
    /// Notification title.
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    /// Notification body.
    #[serde(default)]
    pub body: String,
    /// In-app route opened on tap.
    #[serde(default)]
    pub route: String,
    /// Target device token.
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,
}

fn validate_badge_name_len(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > MAX_BADGE_NAME_LEN {
        return Err(ValidationError::new("length").with_message(Cow::Owned(format!(
            "badgeName must be at most {MAX_BADGE_NAME_LEN} characters"
        ))));
    }
    Ok(())
}
