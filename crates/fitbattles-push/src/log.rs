//! Push sender that only logs.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use fitbattles_core::result::AppResult;
use fitbattles_core::traits::PushSender;
use fitbattles_entity::notification::{DeliveryReceipt, NotificationMessage};

/// Development backend: every send succeeds without leaving the process.
#[derive(Debug, Clone, Default)]
pub struct LogPushSender;

impl LogPushSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PushSender for LogPushSender {
    async fn send(&self, message: &NotificationMessage) -> AppResult<DeliveryReceipt> {
        let message_id = format!("log/{}", Uuid::new_v4());
        info!(
            message_id = %message_id,
            title = %message.title,
            route = %message.route_hint,
            "Push message (not delivered)"
        );
        Ok(DeliveryReceipt::new(message_id))
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
