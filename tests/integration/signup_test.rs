//! Integration tests for signup and profile lookup.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_creates_default_profile() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/signup",
            Some(json!({ "email": "a@x.com", "password": "pw123456" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["username"], "a");
    let id = response.body["data"]["id"].as_str().unwrap();

    let profile = app.request("GET", &format!("/users/{id}"), None).await;
    assert_eq!(profile.status, StatusCode::OK);
    let data = &profile.body["data"];
    assert_eq!(data["email"], "a@x.com");
    assert_eq!(data["username"], "a");
    assert_eq!(data["points"], 0);
    assert_eq!(data["friends"], json!([]));
    assert_eq!(data["profileImageUrl"], "");
    assert_eq!(data["hasDeliveryToken"], false);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = helpers::TestApp::new();
    app.sign_up("dup@x.com").await;

    let response = app
        .request(
            "POST",
            "/signup",
            Some(json!({ "email": "DUP@x.com", "password": "pw123456" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "IDENTITY_CREATION");
    assert_eq!(response.body["message"], "Email already in use");
}

#[tokio::test]
async fn test_signup_weak_password() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/signup",
            Some(json!({ "email": "b@x.com", "password": "pw" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "IDENTITY_CREATION");
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/signup",
            Some(json!({ "email": "not-an-email", "password": "pw123456" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_unknown_profile() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "GET",
            "/users/6f1c1e3e-34b8-4f4b-9a53-0c3c1f5b2a10",
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let response = app.request("GET", "/users/not-a-uuid", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "memory");
    assert_eq!(response.body["data"]["push"], "fake");
}
