//! Route definitions for the FitBattles HTTP API.
//!
//! Write endpoints keep the paths mobile clients already call; read-only
//! lookups live under `/users`.

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(user_routes())
        .merge(award_routes())
        .merge(notification_routes())
        .merge(health_routes())
        .layer(request_timeout(timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Requests running past `timeout` are answered with 408.
fn request_timeout(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Signup, token registration, profile lookup
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::user::sign_up))
        .route("/updateFcmToken", post(handlers::user::update_token))
        .route("/users/{id}", get(handlers::user::get_profile))
}

/// Badge awards
fn award_routes() -> Router<AppState> {
    Router::new()
        .route("/awardBadge", post(handlers::award::award_badge))
        .route("/users/{id}/badges", get(handlers::award::list_badges))
}

/// Direct push send
fn notification_routes() -> Router<AppState> {
    Router::new().route(
        "/sendNotification",
        post(handlers::notification::send_notification),
    )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
