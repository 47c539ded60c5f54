//! # fitbattles-identity
//!
//! Identity backends for FitBattles. An identity backend owns credentials
//! and password policy and hands out the ID that keys the user's profile.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing and password policy enforcement
//! - `provider`: `IdentityProvider` implementations (PostgreSQL, in-memory)

pub mod password;
pub mod provider;

pub use password::{PasswordHasher, PasswordValidator};
#[cfg(feature = "memory")]
pub use provider::MemoryIdentityProvider;
pub use provider::PostgresIdentityProvider;
