//! Badge award domain entities.

pub mod model;

pub use model::{AwardRecord, NewAward};
