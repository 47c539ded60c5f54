//! Integration tests for delivery token registration.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_update_token_last_write_wins() {
    let app = helpers::TestApp::new();
    let id = app.sign_up("t@x.com").await;

    app.set_token(&id, "t1").await;
    app.set_token(&id, "t2").await;

    let profile = app.request("GET", &format!("/users/{id}"), None).await;
    assert_eq!(profile.body["data"]["hasDeliveryToken"], true);

    // The award notification goes to whichever token was written last.
    let award = app
        .request(
            "POST",
            "/awardBadge",
            Some(json!({ "userId": id, "badgeName": "streak-7" })),
        )
        .await;
    assert_eq!(award.status, StatusCode::OK);

    let sent = app.push.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].target_token, "t2");
}

#[tokio::test]
async fn test_update_token_unknown_user() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/updateFcmToken",
            Some(json!({
                "userId": "6f1c1e3e-34b8-4f4b-9a53-0c3c1f5b2a10",
                "fcmToken": "t1",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_token_empty() {
    let app = helpers::TestApp::new();
    let id = app.sign_up("e@x.com").await;

    for token in ["", "   "] {
        let response = app
            .request(
                "POST",
                "/updateFcmToken",
                Some(json!({ "userId": id, "fcmToken": token })),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "VALIDATION");
    }
}

#[tokio::test]
async fn test_update_token_missing_field_is_validation() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/updateFcmToken", Some(json!({ "userId": "x" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("fcmToken")
    );
}

#[tokio::test]
async fn test_update_token_malformed_json_is_validation() {
    let app = helpers::TestApp::new();

    let response = app
        .request_raw("POST", "/updateFcmToken", r#"{"userId": "x", "#)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}
