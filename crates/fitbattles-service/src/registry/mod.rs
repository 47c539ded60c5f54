//! Device delivery token registration.

pub mod service;

pub use service::TokenRegistry;
