//! In-memory profile and award stores.

pub mod store;

pub use store::MemoryStore;
