//! Badge award handlers.

use axum::Json;
use axum::extract::{Path, State};

use fitbattles_entity::award::AwardRecord;
use fitbattles_service::AwardOutcome;

use crate::dto::request::AwardBadgeRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ValidatedJson, parse_user_id};
use crate::state::AppState;

/// POST /awardBadge
///
/// Returns 200 whenever the award was recorded; the notification result
/// is reported inside the body.
///
/// A well-formed ID with no profile is not rejected: the award row is
/// still written and the notification comes back `skipped` with reason
/// "profile not found". Earlier FitBattles backends answered 500 here,
/// after the row had already been stored.
pub async fn award_badge(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AwardBadgeRequest>,
) -> ApiResult<Json<ApiResponse<AwardOutcome>>> {
    let user_id = parse_user_id(&req.user_id)?;

    let outcome = state.awards.award_badge(user_id, &req.badge_name).await?;
    Ok(Json(ApiResponse::ok(outcome)))
}

/// GET /users/{id}/badges
pub async fn list_badges(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<AwardRecord>>>> {
    let user_id = parse_user_id(&id)?;
    let awards = state.awards.list_awards(user_id).await?;
    Ok(Json(ApiResponse::ok(awards)))
}
