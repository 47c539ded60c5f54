//! Integration tests for badge awards.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_token_award_flow() {
    let app = helpers::TestApp::new();

    let signup = app
        .request(
            "POST",
            "/signup",
            Some(json!({ "email": "a@x.com", "password": "pw123456" })),
        )
        .await;
    assert_eq!(signup.body["data"]["username"], "a");
    let id = signup.body["data"]["id"].as_str().unwrap().to_string();

    app.set_token(&id, "tok1").await;

    let response = app
        .request(
            "POST",
            "/awardBadge",
            Some(json!({ "userId": id, "badgeName": "5k-runner" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["record"]["badgeName"], "5k-runner");
    assert_eq!(data["record"]["userId"], id.as_str());
    assert_eq!(data["notification"]["status"], "delivered");
    assert!(data["notification"]["receipt"]["messageId"].is_string());

    let sent = app.push.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains("5k-runner"));
    assert_eq!(sent[0].title, "Congratulations!");
    assert_eq!(sent[0].route_hint, "/badges");

    let badges = app.request("GET", &format!("/users/{id}/badges"), None).await;
    assert_eq!(badges.status, StatusCode::OK);
    assert_eq!(badges.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_award_without_token_skips_notification() {
    let app = helpers::TestApp::new();
    let id = app.sign_up("n@x.com").await;

    let response = app
        .request(
            "POST",
            "/awardBadge",
            Some(json!({ "userId": id, "badgeName": "early-bird" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["notification"]["status"], "skipped");
    assert!(app.push.sent().is_empty());

    let badges = app.request("GET", &format!("/users/{id}/badges"), None).await;
    assert_eq!(badges.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_award_kept_when_delivery_fails() {
    let app = helpers::TestApp::new();
    let id = app.sign_up("f@x.com").await;
    app.set_token(&id, helpers::DEAD_TOKEN).await;

    let response = app
        .request(
            "POST",
            "/awardBadge",
            Some(json!({ "userId": id, "badgeName": "marathon" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let notification = &response.body["data"]["notification"];
    assert_eq!(notification["status"], "failed");
    assert!(
        notification["error"]
            .as_str()
            .unwrap()
            .contains("UNREGISTERED")
    );
    assert_eq!(app.push.sent().len(), 1);

    let badges = app.request("GET", &format!("/users/{id}/badges"), None).await;
    assert_eq!(badges.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_awards_listed_newest_first() {
    let app = helpers::TestApp::new();
    let id = app.sign_up("d@x.com").await;

    for badge in ["first", "second"] {
        let response = app
            .request(
                "POST",
                "/awardBadge",
                Some(json!({ "userId": id, "badgeName": badge })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }
    app.request(
        "POST",
        "/awardBadge",
        Some(json!({ "userId": id, "badgeName": "second" })),
    )
    .await;

    let badges = app.request("GET", &format!("/users/{id}/badges"), None).await;
    let list = badges.body["data"].as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["badgeName"], "second");
    assert_eq!(list[2]["badgeName"], "first");
}

#[tokio::test]
async fn test_award_empty_badge_name() {
    let app = helpers::TestApp::new();
    let id = app.sign_up("v@x.com").await;

    let response = app
        .request(
            "POST",
            "/awardBadge",
            Some(json!({ "userId": id, "badgeName": "" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_award_for_unknown_profile_is_recorded_and_skipped() {
    let app = helpers::TestApp::new();
    let id = "0b7e4a52-2f43-4c1e-9d0c-5a8f3e9b1c77";

    let response = app
        .request(
            "POST",
            "/awardBadge",
            Some(json!({ "userId": id, "badgeName": "ghost" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let notification = &response.body["data"]["notification"];
    assert_eq!(notification["status"], "skipped");
    assert_eq!(notification["reason"], "profile not found");
    assert!(app.push.sent().is_empty());

    let badges = app.request("GET", &format!("/users/{id}/badges"), None).await;
    let list = badges.body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["badgeName"], "ghost");
}

#[tokio::test]
async fn test_award_badge_name_too_long() {
    let app = helpers::TestApp::new();
    let id = app.sign_up("long@x.com").await;

    let response = app
        .request(
            "POST",
            "/awardBadge",
            Some(json!({ "userId": id, "badgeName": "b".repeat(201) })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "badgeName must be at most 200 characters"
    );
}
