//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use fitbattles_core::config::DatabaseConfig;
use fitbattles_core::error::{AppError, ErrorKind};

use crate::migration::run_migrations;

/// Name reported to the server in `pg_stat_activity`.
const APPLICATION_NAME: &str = "fitbattles";

/// Shared PostgreSQL pool used by the stores and the identity backend.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Opens the pool and, when `run_migrations` is set, brings the schema
    /// up to date before returning.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options = connect_options(config)?;

        info!(
            target_db = %describe_target(&options),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = pool_options(config)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        if config.run_migrations {
            run_migrations(&pool).await?;
        }

        info!("PostgreSQL pool ready");
        Ok(Self { pool })
    }

    /// The underlying sqlx pool, for repositories.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trips a trivial query.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e))
    }

    /// Waits for checked-out connections to return, then closes them all.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Parses `database.url` into connect options.
///
/// Only `postgres://` and `postgresql://` URLs are accepted.
fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, AppError> {
    let url = config.url.trim();
    if url.is_empty() {
        return Err(AppError::configuration(
            "database.url is required for the postgres provider",
        ));
    }
    if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
        return Err(AppError::configuration(
            "database.url must be a postgres:// URL",
        ));
    }

    let options = url.parse::<PgConnectOptions>().map_err(|e| {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("Invalid database.url: {e}"),
            e,
        )
    })?;

    Ok(options.application_name(APPLICATION_NAME))
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
}

/// `user@host:port/database`, never including the password.
fn describe_target(options: &PgConnectOptions) -> String {
    format!(
        "{}@{}:{}/{}",
        options.get_username(),
        options.get_host(),
        options.get_port(),
        options.get_database().unwrap_or("")
    )
}
