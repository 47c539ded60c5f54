//! Identity backend configuration.

use serde::{Deserialize, Serialize};

/// Which backend owns credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityProviderKind {
    /// `accounts` table in the configured PostgreSQL database.
    Postgres,
    /// Process-local account map.
    Memory,
}

/// Identity and password policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Identity backend.
    #[serde(default = "default_provider")]
    pub provider: IdentityProviderKind,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Reject passwords with a zxcvbn score below 3.
    #[serde(default)]
    pub require_strong_passwords: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            password_min_length: default_password_min(),
            require_strong_passwords: false,
        }
    }
}

fn default_provider() -> IdentityProviderKind {
    IdentityProviderKind::Memory
}

fn default_password_min() -> usize {
    6
}
