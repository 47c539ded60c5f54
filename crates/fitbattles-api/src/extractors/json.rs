//! JSON body extractor that reports failures as API errors.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use fitbattles_core::error::AppError;

use crate::error::AppErrorResponse;

/// Deserializes and validates a JSON request body.
///
/// Malformed JSON, missing fields, a wrong content type, and `validator`
/// failures all come back as `400 VALIDATION` with the standard error body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::validation(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}
