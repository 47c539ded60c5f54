//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use fitbattles_api::{Backends, build_app};
use fitbattles_core::config::AppConfig;
use fitbattles_core::error::AppError;
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::PushSender;
use fitbattles_entity::notification::{DeliveryReceipt, NotificationMessage};

/// Device token the fake push backend rejects as unregistered.
pub const DEAD_TOKEN: &str = "dead-token";

/// Push backend that records messages and rejects [`DEAD_TOKEN`].
#[derive(Debug, Default)]
pub struct FakePushSender {
    sent: Mutex<Vec<NotificationMessage>>,
}

impl FakePushSender {
    /// Messages received so far, including rejected ones.
    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushSender for FakePushSender {
    async fn send(&self, message: &NotificationMessage) -> AppResult<DeliveryReceipt> {
        let count = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(message.clone());
            sent.len()
        };

        if message.target_token == DEAD_TOKEN {
            return Err(AppError::delivery(
                "FCM rejected message: Requested entity was not found. (NOT_FOUND, UNREGISTERED)",
            ));
        }

        Ok(DeliveryReceipt::new(format!(
            "projects/fit-test/messages/{count}"
        )))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Push backend double
    pub push: Arc<FakePushSender>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over in-memory backends
    pub fn new() -> Self {
        let config = AppConfig::default();
        let push = Arc::new(FakePushSender::default());
        let backends = Backends::in_memory(&config, push.clone());
        let router = build_app(config.clone(), backends);

        Self {
            router,
            push,
            config,
        }
    }

    /// Sign up a user and return their ID
    pub async fn sign_up(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/signup",
                Some(serde_json::json!({ "email": email, "password": "pw123456" })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"]
            .as_str()
            .expect("signup returns an id")
            .to_string()
    }

    /// Register a delivery token for a user
    pub async fn set_token(&self, user_id: &str, token: &str) {
        let response = self
            .request(
                "POST",
                "/updateFcmToken",
                Some(serde_json::json!({ "userId": user_id, "fcmToken": token })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }

    /// Make a JSON request
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.request_raw(method, path, body_str).await
    }

    /// Make a request with an arbitrary body, labelled as JSON
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body_str: impl Into<String>,
    ) -> TestResponse {
        let body_str: String = body_str.into();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
