//! User provisioning: identity plus profile.

pub mod service;

pub use service::ProvisioningService;
