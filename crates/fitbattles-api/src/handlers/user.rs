//! Signup, token registration, and profile lookup.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::{SignUpRequest, UpdateTokenRequest};
use crate::dto::response::{ApiResponse, MessageResponse, ProfileResponse, SignUpResponse};
use crate::error::ApiResult;
use crate::extractors::{ValidatedJson, parse_user_id};
use crate::state::AppState;

/// POST /signup
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignUpRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<SignUpResponse>>)> {
    let profile = state.provisioning.sign_up(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(SignUpResponse {
            id: profile.id,
            username: profile.username,
            message: "User created successfully".to_string(),
        })),
    ))
}

/// POST /updateFcmToken
pub async fn update_token(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateTokenRequest>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let user_id = parse_user_id(&req.user_id)?;

    state
        .tokens
        .update_delivery_token(user_id, &req.fcm_token)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "FCM token updated successfully",
    ))))
}

/// GET /users/{id}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<ProfileResponse>>> {
    let user_id = parse_user_id(&id)?;
    let profile = state.provisioning.get_profile(user_id).await?;
    Ok(Json(ApiResponse::ok(profile.into())))
}
