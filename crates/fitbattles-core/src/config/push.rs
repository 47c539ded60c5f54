//! Push delivery configuration.

use serde::{Deserialize, Serialize};

/// Which backend delivers push messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushProviderKind {
    /// Firebase Cloud Messaging HTTP v1 API.
    Fcm,
    /// Log the message and return a synthetic receipt.
    Log,
}

/// Push delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Push backend.
    #[serde(default = "default_provider")]
    pub provider: PushProviderKind,
    /// Per-send HTTP timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Firebase Cloud Messaging settings.
    #[serde(default)]
    pub fcm: FcmConfig,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            timeout_seconds: default_timeout(),
            fcm: FcmConfig::default(),
        }
    }
}

/// Firebase Cloud Messaging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FcmConfig {
    /// Path to a service-account JSON key. When unset, ambient Google
    /// credentials (`GOOGLE_APPLICATION_CREDENTIALS`, metadata server,
    /// gcloud) are used.
    #[serde(default)]
    pub credentials_path: Option<String>,
    /// Firebase project ID. Defaults to the credential's project.
    #[serde(default)]
    pub project_id: Option<String>,
    /// API base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for FcmConfig {
    fn default() -> Self {
        Self {
            credentials_path: None,
            project_id: None,
            endpoint: default_endpoint(),
        }
    }
}

fn default_provider() -> PushProviderKind {
    PushProviderKind::Log
}

fn default_timeout() -> u64 {
    10
}

fn default_endpoint() -> String {
    "https://fcm.googleapis.com".to_string()
}
