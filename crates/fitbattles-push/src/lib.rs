//! # fitbattles-push
//!
//! Push delivery backends for FitBattles.
//!
//! - [`FcmPushSender`]: Firebase Cloud Messaging HTTP v1 API, authorized
//!   with a Google OAuth2 access token
//! - [`LogPushSender`]: logs each message and returns a synthetic receipt

pub mod fcm;
pub mod log;

use std::sync::Arc;

use fitbattles_core::config::{PushConfig, PushProviderKind};
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::PushSender;

pub use fcm::{AccessTokenSource, FcmPushSender, GoogleTokenSource, StaticTokenSource};
pub use log::LogPushSender;

/// Build the configured push backend.
pub async fn connect(config: &PushConfig) -> AppResult<Arc<dyn PushSender>> {
    let sender: Arc<dyn PushSender> = match config.provider {
        PushProviderKind::Fcm => Arc::new(FcmPushSender::from_config(config).await?),
        PushProviderKind::Log => Arc::new(LogPushSender::new()),
    };
    tracing::info!(provider = sender.name(), "Push backend ready");
    Ok(sender)
}
