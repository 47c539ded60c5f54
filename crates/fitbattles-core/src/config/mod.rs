//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every section has defaults so an empty environment still
//! yields a runnable development configuration.

pub mod app;
pub mod award;
pub mod database;
pub mod identity;
pub mod logging;
pub mod push;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::award::AwardConfig;
pub use self::database::{DatabaseConfig, StoreProvider};
pub use self::identity::{IdentityConfig, IdentityProviderKind};
pub use self::logging::LoggingConfig;
pub use self::push::{FcmConfig, PushConfig, PushProviderKind};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay). It is
/// loaded once at process start and handed to each constructor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Profile and award store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Identity backend settings.
    #[serde(default)]
    pub identity: IdentityConfig,
    /// Push delivery settings.
    #[serde(default)]
    pub push: PushConfig,
    /// Badge award notification settings.
    #[serde(default)]
    pub awards: AwardConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `FITBATTLES__`
    /// (e.g. `FITBATTLES__SERVER__PORT=8080`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FITBATTLES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
