//! Push notification value objects.

pub mod message;
pub mod receipt;

pub use message::NotificationMessage;
pub use receipt::DeliveryReceipt;
