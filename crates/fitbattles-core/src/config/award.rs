//! Badge award notification configuration.

use serde::{Deserialize, Serialize};

/// Content of the notification sent when a badge is awarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardConfig {
    /// Notification title.
    #[serde(default = "default_title")]
    pub title: String,
    /// In-app route opened from the notification.
    #[serde(default = "default_route")]
    pub route: String,
}

impl Default for AwardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            route: default_route(),
        }
    }
}

fn default_title() -> String {
    "Congratulations!".to_string()
}

fn default_route() -> String {
    "/badges".to_string()
}
