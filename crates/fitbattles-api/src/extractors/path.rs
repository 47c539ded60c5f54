//! Typed identifier helpers.

use uuid::Uuid;

use fitbattles_core::error::AppError;

/// Parses a client-supplied user ID.
///
/// IDs are assigned by the identity backend, so a malformed one can only
/// name a user that does not exist.
pub fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::not_found("User not found"))
}
