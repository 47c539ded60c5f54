//! User profile domain entities.

pub mod model;

pub use model::UserProfile;
