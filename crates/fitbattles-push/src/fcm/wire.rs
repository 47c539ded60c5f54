//! JSON bodies of the `messages:send` call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fitbattles_entity::notification::NotificationMessage;

/// Request envelope.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub message: Message<'a>,
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub token: &'a str,
    pub notification: Notification<'a>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<&'static str, &'a str>,
}

#[derive(Debug, Serialize)]
pub struct Notification<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> From<&'a NotificationMessage> for SendRequest<'a> {
    fn from(message: &'a NotificationMessage) -> Self {
        let mut data = HashMap::new();
        if !message.route_hint.is_empty() {
            data.insert("route", message.route_hint.as_str());
        }
        Self {
            message: Message {
                token: &message.target_token,
                notification: Notification {
                    title: &message.title,
                    body: &message.body,
                },
                data,
            },
        }
    }
}

/// Successful response: `name` is `projects/{project}/messages/{id}`.
#[derive(Debug, Deserialize)]
pub struct SendResponse {
    pub name: String,
}

/// Google API error envelope.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(default)]
    pub error_code: Option<String>,
}

impl ErrorBody {
    /// FCM-specific error code such as `UNREGISTERED`, if present.
    pub fn fcm_error_code(&self) -> Option<&str> {
        self.details.iter().find_map(|d| d.error_code.as_deref())
    }
}
