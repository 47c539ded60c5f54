//! Thin wrapper over the push backend.

use std::sync::Arc;

use tracing::{info, warn};

use fitbattles_core::error::{AppError, ErrorKind};
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::PushSender;
use fitbattles_entity::notification::{DeliveryReceipt, NotificationMessage};

/// Sends one message with one backend call. No retry, no batching.
#[derive(Debug, Clone)]
pub struct NotificationSender {
    push: Arc<dyn PushSender>,
}

impl NotificationSender {
    /// Creates a new notification sender.
    pub fn new(push: Arc<dyn PushSender>) -> Self {
        Self { push }
    }

    /// Name of the push backend in use.
    pub fn backend(&self) -> &'static str {
        self.push.name()
    }

    /// Sends a message to its target device.
    pub async fn send(&self, message: &NotificationMessage) -> AppResult<DeliveryReceipt> {
        if !message.has_target() {
            return Err(AppError::validation("Delivery token is required"));
        }

        match self.push.send(message).await {
            Ok(receipt) => {
                info!(
                    message_id = %receipt.message_id,
                    backend = self.push.name(),
                    "Notification sent"
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(backend = self.push.name(), error = %e, "Notification delivery failed");
                Err(e.recast(ErrorKind::Delivery))
            }
        }
    }
}
