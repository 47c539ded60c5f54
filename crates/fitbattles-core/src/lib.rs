//! # fitbattles-core
//!
//! Core crate for FitBattles. Contains the backend traits (identity,
//! profile/award stores, push delivery), configuration schemas, and the
//! unified error system.
//!
//! Depends only on `fitbattles-entity` for the domain models that cross
//! the backend traits.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
