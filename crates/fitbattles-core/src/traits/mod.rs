//! Backend traits defined in `fitbattles-core` and implemented by the
//! database, identity, and push crates.

pub mod identity;
pub mod push;
pub mod store;

pub use identity::IdentityProvider;
pub use push::PushSender;
pub use store::{AwardStore, ProfileStore};
