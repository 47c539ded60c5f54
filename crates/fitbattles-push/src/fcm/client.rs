//! FCM HTTP v1 client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use fitbattles_core::config::PushConfig;
use fitbattles_core::error::{AppError, ErrorKind};
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::PushSender;
use fitbattles_entity::notification::{DeliveryReceipt, NotificationMessage};

use super::auth::{AccessTokenSource, GoogleTokenSource};
use super::wire::{ErrorResponse, SendRequest, SendResponse};

/// Sends one message per call to `projects/{project}/messages:send`.
#[derive(Debug, Clone)]
pub struct FcmPushSender {
    client: reqwest::Client,
    tokens: Arc<dyn AccessTokenSource>,
    send_url: String,
}

impl FcmPushSender {
    /// Build a sender with an explicit token source and project.
    pub fn new(
        endpoint: &str,
        project_id: &str,
        timeout: Duration,
        tokens: Arc<dyn AccessTokenSource>,
    ) -> AppResult<Self> {
        if project_id.is_empty() {
            return Err(AppError::configuration("FCM project_id cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to create HTTP client: {e}"),
                    e,
                )
            })?;

        let send_url = format!(
            "{}/v1/projects/{}/messages:send",
            endpoint.trim_end_matches('/'),
            project_id
        );

        Ok(Self {
            client,
            tokens,
            send_url,
        })
    }

    /// Resolve credentials and project from configuration.
    ///
    /// A configured `credentials_path` wins over ambient credentials; a
    /// configured `project_id` wins over the credential's own project.
    pub async fn from_config(config: &PushConfig) -> AppResult<Self> {
        let fcm = &config.fcm;
        let tokens = match fcm.credentials_path.as_deref() {
            Some(path) => GoogleTokenSource::from_file(path)?,
            None => GoogleTokenSource::ambient().await?,
        };

        let project_id = match fcm.project_id.clone() {
            Some(id) => id,
            None => tokens.project_id().await?.ok_or_else(|| {
                AppError::configuration(
                    "FCM project_id is not configured and the credentials do not name one",
                )
            })?,
        };

        Self::new(
            &fcm.endpoint,
            &project_id,
            Duration::from_secs(config.timeout_seconds),
            Arc::new(tokens),
        )
    }

    /// Full URL of the send endpoint.
    pub fn send_url(&self) -> &str {
        &self.send_url
    }

    fn rejection(status: reqwest::StatusCode, body: &str) -> AppError {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => {
                let err = parsed.error;
                let detail = match err.fcm_error_code() {
                    Some(code) => format!("{} ({}, {})", err.message, err.status, code),
                    None => format!("{} ({})", err.message, err.status),
                };
                AppError::delivery(format!("FCM rejected message: {detail}"))
            }
            Err(_) => AppError::delivery(format!("FCM rejected message: {status} - {body}")),
        }
    }
}

#[async_trait]
impl PushSender for FcmPushSender {
    async fn send(&self, message: &NotificationMessage) -> AppResult<DeliveryReceipt> {
        let access_token = self.tokens.access_token().await?;

        let response = self
            .client
            .post(&self.send_url)
            .bearer_auth(&access_token)
            .json(&SendRequest::from(message))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Delivery,
                    format!("FCM request failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let err = Self::rejection(status, &body);
            warn!(status = %status, error = %err.message, "FCM send rejected");
            return Err(err);
        }

        let sent: SendResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Delivery,
                format!("Unreadable FCM response: {e}"),
                e,
            )
        })?;

        debug!(message_id = %sent.name, "FCM message accepted");
        Ok(DeliveryReceipt::new(sent.name))
    }

    fn name(&self) -> &'static str {
        "fcm"
    }
}
