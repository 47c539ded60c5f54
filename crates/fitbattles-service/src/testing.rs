//! Backend doubles for service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use fitbattles_core::error::AppError;
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::{AwardStore, IdentityProvider, ProfileStore, PushSender};
use fitbattles_entity::award::{AwardRecord, NewAward};
use fitbattles_entity::notification::{DeliveryReceipt, NotificationMessage};
use fitbattles_entity::profile::UserProfile;

/// Records every message; either accepts all or rejects all.
#[derive(Debug)]
pub struct RecordingPushSender {
    sent: Mutex<Vec<NotificationMessage>>,
    failure: Option<String>,
}

impl RecordingPushSender {
    pub fn succeeding() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushSender for RecordingPushSender {
    async fn send(&self, message: &NotificationMessage) -> AppResult<DeliveryReceipt> {
        let count = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(message.clone());
            sent.len()
        };
        match &self.failure {
            Some(msg) => Err(AppError::delivery(msg.clone())),
            None => Ok(DeliveryReceipt::new(format!("msg-{count}"))),
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Always returns the same identity ID.
#[derive(Debug)]
pub struct FixedIdentityProvider {
    id: Uuid,
    calls: AtomicUsize,
}

impl FixedIdentityProvider {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for FixedIdentityProvider {
    async fn create_identity(&self, _email: &str, _password: &str) -> AppResult<Uuid> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.id)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Profile store whose every call fails.
#[derive(Debug)]
pub struct FailingProfileStore;

#[async_trait]
impl ProfileStore for FailingProfileStore {
    async fn insert(&self, _profile: &UserProfile) -> AppResult<bool> {
        Err(AppError::database("profile store unavailable"))
    }

    async fn find(&self, _id: Uuid) -> AppResult<Option<UserProfile>> {
        Err(AppError::database("profile store unavailable"))
    }

    async fn set_delivery_token(&self, _id: Uuid, _token: &str) -> AppResult<bool> {
        Err(AppError::database("profile store unavailable"))
    }
}

/// Award store whose every call fails.
#[derive(Debug)]
pub struct FailingAwardStore;

#[async_trait]
impl AwardStore for FailingAwardStore {
    async fn append(&self, _award: NewAward) -> AppResult<AwardRecord> {
        Err(AppError::database("award store unavailable"))
    }

    async fn find_by_user(&self, _user_id: Uuid) -> AppResult<Vec<AwardRecord>> {
        Err(AppError::database("award store unavailable"))
    }
}
