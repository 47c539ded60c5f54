//! PostgreSQL repository implementations.

pub mod account;
pub mod award;
pub mod profile;

pub use account::AccountRepository;
pub use award::AwardRepository;
pub use profile::ProfileRepository;
