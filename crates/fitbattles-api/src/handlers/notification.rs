//! Direct push send.

use axum::Json;
use axum::extract::State;

use fitbattles_entity::notification::{DeliveryReceipt, NotificationMessage};

use crate::dto::request::SendNotificationRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /sendNotification
pub async fn send_notification(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SendNotificationRequest>,
) -> ApiResult<Json<ApiResponse<DeliveryReceipt>>> {
    let message = NotificationMessage::new(req.title, req.body, req.route, req.token);
    let receipt = state.notifications.send(&message).await?;
    Ok(Json(ApiResponse::ok(receipt)))
}
