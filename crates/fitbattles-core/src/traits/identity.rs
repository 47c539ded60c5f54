//! Identity backend trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// Creates credential records and assigns identity IDs.
///
/// Implementations own password policy; callers never validate passwords
/// themselves. A rejected signup (duplicate email, weak password) is
/// reported as an error whose message is safe to show to the client.
#[async_trait]
pub trait IdentityProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Create an identity and return its ID.
    async fn create_identity(&self, email: &str, password: &str) -> AppResult<Uuid>;

    /// Short backend name used in logs.
    fn name(&self) -> &'static str;
}
