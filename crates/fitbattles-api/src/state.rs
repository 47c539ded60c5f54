//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use fitbattles_core::config::AppConfig;
use fitbattles_database::DatabasePool;
use fitbattles_service::{AwardDispatcher, NotificationSender, ProvisioningService, TokenRegistry};

use crate::app::Backends;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for uptime reporting
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL pool, when any backend uses it
    pub db: Option<DatabasePool>,

    // ── Services ─────────────────────────────────────────────
    /// Signup and profile lookup
    pub provisioning: Arc<ProvisioningService>,
    /// Delivery token updates
    pub tokens: Arc<TokenRegistry>,
    /// Badge awards
    pub awards: Arc<AwardDispatcher>,
    /// Direct push sends
    pub notifications: Arc<NotificationSender>,
}

impl AppState {
    /// Builds the services over the given backends.
    pub fn new(config: AppConfig, backends: Backends) -> Self {
        let sender = NotificationSender::new(backends.push);

        let provisioning = ProvisioningService::new(backends.identities, backends.profiles.clone());
        let tokens = TokenRegistry::new(backends.profiles.clone());
        let awards = AwardDispatcher::new(
            backends.awards,
            backends.profiles,
            sender.clone(),
            config.awards.clone(),
        );

        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            db: backends.db,
            provisioning: Arc::new(provisioning),
            tokens: Arc::new(tokens),
            awards: Arc::new(awards),
            notifications: Arc::new(sender),
        }
    }
}
