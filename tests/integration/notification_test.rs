//! Integration tests for direct notification sends.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_send_notification_returns_receipt() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/sendNotification",
            Some(json!({
                "title": "Battle invite",
                "body": "Sam challenged you",
                "route": "/battles",
                "token": "device-1",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["messageId"],
        "projects/fit-test/messages/1"
    );

    let sent = app.push.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].route_hint, "/battles");
    assert_eq!(sent[0].target_token, "device-1");
}

#[tokio::test]
async fn test_send_notification_delivery_failure() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/sendNotification",
            Some(json!({
                "title": "Battle invite",
                "body": "Sam challenged you",
                "route": "/battles",
                "token": helpers::DEAD_TOKEN,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["error"], "DELIVERY");
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("UNREGISTERED")
    );
}

#[tokio::test]
async fn test_send_notification_requires_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/sendNotification",
            Some(json!({ "title": "Hi", "body": "there", "route": "", "token": "  " })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
    assert!(app.push.sent().is_empty());
}
