//! HTTP request handlers.

pub mod award;
pub mod health;
pub mod notification;
pub mod user;
