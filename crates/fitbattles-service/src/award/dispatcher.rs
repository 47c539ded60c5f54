//! Append an award, then congratulate the user if they have a device.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use fitbattles_core::config::AwardConfig;
use fitbattles_core::error::{AppError, ErrorKind};
use fitbattles_core::result::AppResult;
use fitbattles_core::traits::{AwardStore, ProfileStore};
use fitbattles_entity::award::{AwardRecord, NewAward};
use fitbattles_entity::notification::NotificationMessage;

use super::outcome::{AwardOutcome, NotificationStatus};
use crate::notification::NotificationSender;

/// Awards badges and dispatches the follow-up notification.
#[derive(Debug, Clone)]
pub struct AwardDispatcher {
    awards: Arc<dyn AwardStore>,
    profiles: Arc<dyn ProfileStore>,
    sender: NotificationSender,
    config: AwardConfig,
}

impl AwardDispatcher {
    /// Creates a new award dispatcher.
    pub fn new(
        awards: Arc<dyn AwardStore>,
        profiles: Arc<dyn ProfileStore>,
        sender: NotificationSender,
        config: AwardConfig,
    ) -> Self {
        Self {
            awards,
            profiles,
            sender,
            config,
        }
    }

    /// Awards `badge_name` to the user.
    ///
    /// Only the award write can fail the call. Once the record exists,
    /// token lookup and delivery problems are reported in
    /// [`AwardOutcome::notification`].
    pub async fn award_badge(&self, user_id: Uuid, badge_name: &str) -> AppResult<AwardOutcome> {
        let badge_name = badge_name.trim();
        if badge_name.is_empty() {
            return Err(AppError::validation("Badge name is required"));
        }

        let record = self
            .awards
            .append(NewAward::now(user_id, badge_name))
            .await
            .map_err(|e| e.recast(ErrorKind::RecordPersist))?;

        info!(user_id = %user_id, badge = %badge_name, award_id = %record.id, "Badge awarded");

        let notification = self.notify(&record).await;
        Ok(AwardOutcome {
            record,
            notification,
        })
    }

    /// Lists a user's awards, newest first.
    pub async fn list_awards(&self, user_id: Uuid) -> AppResult<Vec<AwardRecord>> {
        self.awards.find_by_user(user_id).await
    }

    async fn notify(&self, record: &AwardRecord) -> NotificationStatus {
        let profile = match self.profiles.find(record.user_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                warn!(user_id = %record.user_id, "Award written for unknown profile");
                return NotificationStatus::Skipped {
                    reason: "profile not found".to_string(),
                };
            }
            Err(e) => {
                warn!(user_id = %record.user_id, error = %e, "Delivery token lookup failed");
                return NotificationStatus::Failed { error: e.message };
            }
        };

        let Some(token) = profile.active_delivery_token() else {
            return NotificationStatus::Skipped {
                reason: "no delivery token".to_string(),
            };
        };

        let message = NotificationMessage::new(
            self.config.title.clone(),
            format!("You earned the {} badge!", record.badge_name),
            self.config.route.clone(),
            token,
        );

        match self.sender.send(&message).await {
            Ok(receipt) => NotificationStatus::Delivered { receipt },
            Err(e) => {
                warn!(
                    user_id = %record.user_id,
                    badge = %record.badge_name,
                    error = %e,
                    "Award kept, notification failed"
                );
                NotificationStatus::Failed { error: e.message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingAwardStore, FailingProfileStore, RecordingPushSender};
    use fitbattles_database::MemoryStore;
    use fitbattles_entity::profile::UserProfile;

    async fn seed(store: &MemoryStore, token: Option<&str>) -> Uuid {
        let id = Uuid::new_v4();
        store
            .insert(&UserProfile::new_for_identity(id, "a@x.com"))
            .await
            .unwrap();
        if let Some(token) = token {
            store.set_delivery_token(id, token).await.unwrap();
        }
        id
    }

    fn dispatcher(store: Arc<MemoryStore>, push: Arc<RecordingPushSender>) -> AwardDispatcher {
        AwardDispatcher::new(
            store.clone(),
            store,
            NotificationSender::new(push),
            AwardConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_award_with_token_sends_congratulation() {
        let store = Arc::new(MemoryStore::new());
        let push = Arc::new(RecordingPushSender::succeeding());
        let user = seed(&store, Some("tok1")).await;

        let outcome = dispatcher(store.clone(), push.clone())
            .award_badge(user, "5k-runner")
            .await
            .unwrap();

        assert!(outcome.notification.is_delivered());
        assert_eq!(outcome.record.badge_name, "5k-runner");
        assert_eq!(store.award_count(), 1);

        let sent = push.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Congratulations!");
        assert_eq!(sent[0].body, "You earned the 5k-runner badge!");
        assert_eq!(sent[0].route_hint, "/badges");
        assert_eq!(sent[0].target_token, "tok1");
    }

    #[tokio::test]
    async fn test_award_without_token_skips_sender() {
        let store = Arc::new(MemoryStore::new());
        let push = Arc::new(RecordingPushSender::succeeding());
        let user = seed(&store, None).await;

        let outcome = dispatcher(store.clone(), push.clone())
            .award_badge(user, "early-bird")
            .await
            .unwrap();

        assert!(matches!(
            outcome.notification,
            NotificationStatus::Skipped { .. }
        ));
        assert_eq!(store.award_count(), 1);
        assert!(push.sent().is_empty());
    }

    #[tokio::test]
    async fn test_failed_send_keeps_award() {
        let store = Arc::new(MemoryStore::new());
        let push = Arc::new(RecordingPushSender::failing("token unregistered"));
        let user = seed(&store, Some("tok1")).await;

        let outcome = dispatcher(store.clone(), push.clone())
            .award_badge(user, "5k-runner")
            .await
            .unwrap();

        match outcome.notification {
            NotificationStatus::Failed { error } => assert_eq!(error, "token unregistered"),
            other => panic!("expected failed status, got {other:?}"),
        }
        assert_eq!(store.award_count(), 1);
        assert_eq!(push.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_profile_still_records_award() {
        let store = Arc::new(MemoryStore::new());
        let push = Arc::new(RecordingPushSender::succeeding());

        let outcome = dispatcher(store.clone(), push.clone())
            .award_badge(Uuid::new_v4(), "ghost")
            .await
            .unwrap();

        assert!(matches!(
            outcome.notification,
            NotificationStatus::Skipped { .. }
        ));
        assert_eq!(store.award_count(), 1);
        assert!(push.sent().is_empty());
    }

    #[tokio::test]
    async fn test_profile_lookup_failure_is_failed_status() {
        let store = Arc::new(MemoryStore::new());
        let push = Arc::new(RecordingPushSender::succeeding());
        let dispatcher = AwardDispatcher::new(
            store.clone(),
            Arc::new(FailingProfileStore),
            NotificationSender::new(push.clone()),
            AwardConfig::default(),
        );

        let outcome = dispatcher
            .award_badge(Uuid::new_v4(), "5k-runner")
            .await
            .unwrap();

        assert!(matches!(outcome.notification, NotificationStatus::Failed { .. }));
        assert_eq!(store.award_count(), 1);
    }

    #[tokio::test]
    async fn test_append_failure_is_record_persist() {
        let store = Arc::new(MemoryStore::new());
        let push = Arc::new(RecordingPushSender::succeeding());
        let user = seed(&store, Some("tok1")).await;
        let dispatcher = AwardDispatcher::new(
            Arc::new(FailingAwardStore),
            store,
            NotificationSender::new(push.clone()),
            AwardConfig::default(),
        );

        let err = dispatcher.award_badge(user, "5k-runner").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::RecordPersist);
        assert!(push.sent().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_awards_are_kept() {
        let store = Arc::new(MemoryStore::new());
        let push = Arc::new(RecordingPushSender::succeeding());
        let user = seed(&store, None).await;
        let dispatcher = dispatcher(store.clone(), push);

        dispatcher.award_badge(user, "5k-runner").await.unwrap();
        dispatcher.award_badge(user, "5k-runner").await.unwrap();

        let awards = dispatcher.list_awards(user).await.unwrap();
        assert_eq!(awards.len(), 2);
        assert!(awards[0].earned_at >= awards[1].earned_at);
    }

    #[tokio::test]
    async fn test_empty_badge_name_rejected() {
        let store = Arc::new(MemoryStore::new());
        let push = Arc::new(RecordingPushSender::succeeding());
        let err = dispatcher(store.clone(), push)
            .award_badge(Uuid::new_v4(), " ")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(store.award_count(), 0);
    }
}
