//! Result of a badge award.

use serde::Serialize;

use fitbattles_entity::award::AwardRecord;
use fitbattles_entity::notification::DeliveryReceipt;

/// A written award plus what happened to its notification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardOutcome {
    /// The appended award record. Always present.
    pub record: AwardRecord,
    /// Notification result.
    pub notification: NotificationStatus,
}

/// What happened to the congratulation push.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NotificationStatus {
    /// The push backend accepted the message.
    Delivered { receipt: DeliveryReceipt },
    /// No send was attempted.
    Skipped { reason: String },
    /// A send was attempted (or the token lookup failed) and did not succeed.
    Failed { error: String },
}

impl NotificationStatus {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}
