//! Notification message model.

use serde::{Deserialize, Serialize};

/// A push message addressed to one device.
///
/// Messages are built per dispatch and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMessage {
    /// Notification title shown by the device.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// In-app route the client opens when the notification is tapped.
    pub route_hint: String,
    /// Delivery token of the target device.
    pub target_token: String,
}

impl NotificationMessage {
    /// Create a new message.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        route_hint: impl Into<String>,
        target_token: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            route_hint: route_hint.into(),
            target_token: target_token.into(),
        }
    }

    /// Whether the message has a deliverable target.
    pub fn has_target(&self) -> bool {
        !self.target_token.trim().is_empty()
    }
}
