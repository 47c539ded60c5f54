//! Push backend trait.

use async_trait::async_trait;

use fitbattles_entity::notification::{DeliveryReceipt, NotificationMessage};

use crate::result::AppResult;

/// Delivers a single message to a single device.
///
/// One call maps to one backend request. Implementations do not retry.
#[async_trait]
pub trait PushSender: Send + Sync + std::fmt::Debug + 'static {
    /// Send the message to `message.target_token`.
    async fn send(&self, message: &NotificationMessage) -> AppResult<DeliveryReceipt>;

    /// Short backend name used in logs.
    fn name(&self) -> &'static str;
}
