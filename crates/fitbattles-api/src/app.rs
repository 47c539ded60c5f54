//! Application builder: backends from configuration, router, and server loop.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use fitbattles_core::config::{AppConfig, IdentityProviderKind, StoreProvider};
use fitbattles_core::error::AppError;
use fitbattles_core::traits::{AwardStore, IdentityProvider, ProfileStore, PushSender};
use fitbattles_database::repositories::{AwardRepository, ProfileRepository};
use fitbattles_database::{DatabasePool, MemoryStore};
use fitbattles_identity::{MemoryIdentityProvider, PostgresIdentityProvider};

use crate::router::build_router;
use crate::state::AppState;

/// The backend set services are built over.
#[derive(Debug, Clone)]
pub struct Backends {
    /// Identity backend.
    pub identities: Arc<dyn IdentityProvider>,
    /// Profile store.
    pub profiles: Arc<dyn ProfileStore>,
    /// Award store.
    pub awards: Arc<dyn AwardStore>,
    /// Push backend.
    pub push: Arc<dyn PushSender>,
    /// Shared PostgreSQL pool, when any backend above uses it.
    pub db: Option<DatabasePool>,
}

impl Backends {
    /// Connects the backends selected in configuration.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let needs_postgres = config.database.provider == StoreProvider::Postgres
            || config.identity.provider == IdentityProviderKind::Postgres;

        let db = if needs_postgres {
            Some(DatabasePool::connect(&config.database).await?)
        } else {
            None
        };

        let memory = MemoryStore::new();

        let (profiles, awards): (Arc<dyn ProfileStore>, Arc<dyn AwardStore>) =
            match (&config.database.provider, &db) {
                (StoreProvider::Postgres, Some(db)) => (
                    Arc::new(ProfileRepository::new(db.pool().clone())),
                    Arc::new(AwardRepository::new(db.pool().clone())),
                ),
                _ => (Arc::new(memory.clone()), Arc::new(memory)),
            };

        let identities: Arc<dyn IdentityProvider> = match (&config.identity.provider, &db) {
            (IdentityProviderKind::Postgres, Some(db)) => Arc::new(PostgresIdentityProvider::new(
                db.pool().clone(),
                &config.identity,
            )),
            _ => Arc::new(MemoryIdentityProvider::new(&config.identity)),
        };

        let push = fitbattles_push::connect(&config.push).await?;

        tracing::info!(
            store = ?config.database.provider,
            identity = identities.name(),
            push = push.name(),
            "Backends initialized"
        );

        Ok(Self {
            identities,
            profiles,
            awards,
            push,
            db,
        })
    }

    /// In-memory identity and stores over the given push backend.
    pub fn in_memory(config: &AppConfig, push: Arc<dyn PushSender>) -> Self {
        let store = MemoryStore::new();
        Self {
            identities: Arc::new(MemoryIdentityProvider::new(&config.identity)),
            profiles: Arc::new(store.clone()),
            awards: Arc::new(store),
            push,
            db: None,
        }
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(config: AppConfig, backends: Backends) -> Router {
    build_router(AppState::new(config, backends))
}

/// Runs the FitBattles server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FitBattles server...");

    let backends = Backends::connect(&config).await?;
    let db = backends.db.clone();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = build_app(config, backends);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("FitBattles server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(db) = db {
        if tokio::time::timeout(grace, db.close()).await.is_err() {
            tracing::warn!("Database pool did not close within the grace period");
        }
    }

    tracing::info!("FitBattles server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
