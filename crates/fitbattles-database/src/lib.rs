//! # fitbattles-database
//!
//! PostgreSQL connection management, embedded migrations, and the
//! profile/award store implementations (PostgreSQL and in-memory).

pub mod connection;
#[cfg(feature = "memory")]
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
