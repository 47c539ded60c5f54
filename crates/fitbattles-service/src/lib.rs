//! # fitbattles-service
//!
//! Business logic for FitBattles. Each service orchestrates the backend
//! traits from `fitbattles-core` to implement one use case.
//!
//! Services follow constructor injection. All backends are provided at
//! construction time via `Arc<dyn …>` references.

pub mod award;
pub mod notification;
pub mod provisioning;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use award::{AwardDispatcher, AwardOutcome, NotificationStatus};
pub use notification::NotificationSender;
pub use provisioning::ProvisioningService;
pub use registry::TokenRegistry;
