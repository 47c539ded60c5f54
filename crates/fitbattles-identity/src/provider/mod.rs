//! `IdentityProvider` implementations.

#[cfg(feature = "memory")]
pub mod memory;
pub mod postgres;

#[cfg(feature = "memory")]
pub use memory::MemoryIdentityProvider;
pub use postgres::PostgresIdentityProvider;
