//! Identity (credential) entities.

pub mod model;

pub use model::Account;
