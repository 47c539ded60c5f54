//! Firebase Cloud Messaging HTTP v1 backend.

pub mod auth;
pub mod client;
pub mod wire;

pub use auth::{AccessTokenSource, GoogleTokenSource, StaticTokenSource};
pub use client::FcmPushSender;

/// OAuth2 scope required by the FCM send endpoint.
pub const FCM_SCOPES: &[&str] = &["https://www.googleapis.com/auth/firebase.messaging"];
