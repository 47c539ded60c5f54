//! Single-message push delivery.

pub mod sender;

pub use sender::NotificationSender;
