//! # fitbattles-api
//!
//! HTTP API layer for FitBattles built on Axum.
//!
//! Provides the signup, token, award, and notification endpoints, the
//! read-only profile and award listings, middleware (CORS, logging), DTOs,
//! error mapping, and the wiring from configuration to backends.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{Backends, build_app, run_server};
pub use state::AppState;
