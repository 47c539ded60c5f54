//! Delivery receipt model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Synchronous acknowledgement returned by a push backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    /// Backend-assigned message identifier.
    pub message_id: String,
    /// When the backend accepted the message.
    pub sent_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    /// Create a receipt stamped with the current time.
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            sent_at: Utc::now(),
        }
    }
}
