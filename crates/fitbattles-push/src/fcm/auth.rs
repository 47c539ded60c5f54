//! Access tokens for the FCM API.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use gcp_auth::TokenProvider;

use fitbattles_core::error::{AppError, ErrorKind};
use fitbattles_core::result::AppResult;

use super::FCM_SCOPES;

/// Supplies bearer tokens for FCM requests.
#[async_trait]
pub trait AccessTokenSource: Send + Sync + fmt::Debug + 'static {
    /// Return a currently valid access token.
    async fn access_token(&self) -> AppResult<String>;

    /// Project the credentials belong to, if known.
    async fn project_id(&self) -> AppResult<Option<String>>;
}

/// Google OAuth2 credentials via `gcp_auth`.
///
/// Tokens are cached and refreshed by the underlying provider.
pub struct GoogleTokenSource {
    provider: Arc<dyn TokenProvider>,
}

impl fmt::Debug for GoogleTokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTokenSource").finish_non_exhaustive()
    }
}

impl GoogleTokenSource {
    /// Discover ambient credentials (`GOOGLE_APPLICATION_CREDENTIALS`,
    /// metadata server, gcloud).
    pub async fn ambient() -> AppResult<Self> {
        let provider = gcp_auth::provider().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to initialize Google credentials: {e}"),
                e,
            )
        })?;
        Ok(Self { provider })
    }

    /// Load a service-account key file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let account = gcp_auth::CustomServiceAccount::from_file(path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to load service account from '{path}': {e}"),
                e,
            )
        })?;
        Ok(Self {
            provider: Arc::new(account),
        })
    }
}

#[async_trait]
impl AccessTokenSource for GoogleTokenSource {
    async fn access_token(&self) -> AppResult<String> {
        let token = self.provider.token(FCM_SCOPES).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Delivery,
                format!("Failed to get Google access token: {e}"),
                e,
            )
        })?;
        Ok(token.as_str().to_string())
    }

    async fn project_id(&self) -> AppResult<Option<String>> {
        match self.provider.project_id().await {
            Ok(id) => Ok(Some(id.to_string())),
            Err(e) => {
                tracing::debug!(error = %e, "Credentials carry no project ID");
                Ok(None)
            }
        }
    }
}

/// Fixed bearer token, for emulators and tests.
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    token: String,
}

impl StaticTokenSource {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AccessTokenSource for StaticTokenSource {
    async fn access_token(&self) -> AppResult<String> {
        Ok(self.token.clone())
    }

    async fn project_id(&self) -> AppResult<Option<String>> {
        Ok(None)
    }
}
