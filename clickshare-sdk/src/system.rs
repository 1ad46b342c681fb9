//! ClickShare - main entry point for the SDK

use std::sync::Arc;

use parking_lot::Mutex;

use clickshare_api::{ClickShareClient, DeviceConfig};
use clickshare_poller::{
    ConnectionHealth, FeedbackKey, StatusNotifier, StatusSource, SubscriptionPoller,
};

use crate::SdkError;

/// Cached feedback values and connection health
///
/// Implements [`StatusNotifier`] for the poller: change batches toggle the
/// affected keys, health reports replace the cached health. Keys start out
/// false while the device status is still unknown, matching the poller's
/// first-measurement diffing.
#[derive(Debug, Default)]
pub struct FeedbackStates {
    // Indexed by FeedbackKey::ALL order.
    values: Mutex<[bool; 4]>,
    health: Mutex<Option<ConnectionHealth>>,
}

impl FeedbackStates {
    /// Current boolean value of a feedback key
    pub fn value(&self, key: FeedbackKey) -> bool {
        let index = FeedbackKey::ALL.iter().position(|k| *k == key).unwrap_or(0);
        self.values.lock()[index]
    }

    /// Health reported by the most recent poll cycle, if any ran yet
    pub fn health(&self) -> Option<ConnectionHealth> {
        self.health.lock().clone()
    }
}

impl StatusNotifier for FeedbackStates {
    fn connection_health(&self, health: ConnectionHealth) {
        *self.health.lock() = Some(health);
    }

    fn feedbacks_changed(&self, keys: &[FeedbackKey]) {
        let mut values = self.values.lock();
        for (index, key) in FeedbackKey::ALL.iter().enumerate() {
            if keys.contains(key) {
                values[index] = !values[index];
            }
        }
    }
}

/// Handle for one ClickShare unit
///
/// Ties a configured REST client to a subscription-gated status poller and
/// exposes the four feedback signals plus the wallpaper command.
///
/// # Example
///
/// ```rust,ignore
/// use clickshare_sdk::{ClickShare, DeviceConfig, FeedbackKey};
///
/// let config = DeviceConfig::new("192.168.1.50".parse()?, "api", "secret");
/// let clickshare = ClickShare::new(config)?;
///
/// // Polling runs only while at least one subscription is alive.
/// let in_use = clickshare.subscribe_feedback(FeedbackKey::InUse);
/// println!("in use: {}", in_use.value());
/// drop(in_use); // polling winds down within one interval
///
/// clickshare.select_wallpaper(1001).await?;
/// ```
pub struct ClickShare {
    client: Arc<ClickShareClient>,
    feedbacks: Arc<FeedbackStates>,
    poller: Arc<SubscriptionPoller>,
}

impl ClickShare {
    /// Create a handle for the unit described by `config`
    ///
    /// Validates the config and builds the REST client; no network traffic
    /// happens until a feedback subscription or command is issued.
    pub fn new(config: DeviceConfig) -> Result<Self, SdkError> {
        config.validate()?;
        let client = ClickShareClient::new(&config)?;
        Ok(Self::with_client(client))
    }

    /// Create a handle around an already-built client
    ///
    /// For deployments that need a custom base URL, and for tests.
    pub fn with_client(client: ClickShareClient) -> Self {
        let client = Arc::new(client);
        let feedbacks = Arc::new(FeedbackStates::default());
        let poller = Arc::new(SubscriptionPoller::new(
            Arc::clone(&client) as Arc<dyn StatusSource>,
            Arc::clone(&feedbacks) as Arc<dyn StatusNotifier>,
        ));

        Self {
            client,
            feedbacks,
            poller,
        }
    }

    /// Subscribe to one feedback signal
    ///
    /// The returned guard keeps the shared polling loop alive; dropping it
    /// releases one unit of interest. Guards for different keys share the
    /// same loop and the same interest counter.
    pub fn subscribe_feedback(&self, key: FeedbackKey) -> FeedbackSubscription {
        self.poller.subscribe();
        FeedbackSubscription {
            key,
            poller: Arc::clone(&self.poller),
            states: Arc::clone(&self.feedbacks),
        }
    }

    /// Current value of a feedback signal (false while status is unknown)
    pub fn feedback_value(&self, key: FeedbackKey) -> bool {
        self.feedbacks.value(key)
    }

    /// Health reported by the most recent poll cycle
    pub fn connection_health(&self) -> Option<ConnectionHealth> {
        self.feedbacks.health()
    }

    /// Switch the unit's active wallpaper
    ///
    /// Independent of polling; failures surface to the caller and are not
    /// retried. Built-in wallpapers have ids 1 and 2, user wallpapers start
    /// at 1001.
    pub async fn select_wallpaper(&self, id: u32) -> Result<(), SdkError> {
        tracing::info!(id, "switching wallpaper");
        self.client.select_wallpaper(id).await?;
        Ok(())
    }

    /// The underlying poller, for host integrations that manage interest
    /// themselves
    pub fn poller(&self) -> &SubscriptionPoller {
        &self.poller
    }
}

/// RAII guard for one feedback subscription
///
/// Holds one unit of polling interest; dropping it releases that unit. Once
/// interest reaches zero across all guards the polling loop exits at its
/// next wake-up.
pub struct FeedbackSubscription {
    key: FeedbackKey,
    poller: Arc<SubscriptionPoller>,
    states: Arc<FeedbackStates>,
}

impl FeedbackSubscription {
    /// The key this subscription tracks
    pub fn key(&self) -> FeedbackKey {
        self.key
    }

    /// Current value of the tracked signal
    pub fn value(&self) -> bool {
        self.states.value(self.key)
    }
}

impl Drop for FeedbackSubscription {
    fn drop(&mut self) {
        self.poller.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::Ipv4Addr;

    fn unreachable_handle() -> ClickShare {
        // Points at a closed local port; poll cycles fail, which is fine for
        // exercising the interest accounting.
        let client =
            ClickShareClient::with_base_url("http://127.0.0.1:1/v2", "user", "pass").unwrap();
        ClickShare::with_client(client)
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut config = DeviceConfig::new(Ipv4Addr::new(192, 168, 1, 50), "user", "pass");
        config.port = 0;
        assert!(matches!(
            ClickShare::new(config),
            Err(SdkError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn guards_share_one_interest_counter() {
        let clickshare = unreachable_handle();
        assert_eq!(clickshare.poller().subscription_count(), 0);

        let in_use = clickshare.subscribe_feedback(FeedbackKey::InUse);
        let idle = clickshare.subscribe_feedback(FeedbackKey::Idle);
        assert_eq!(clickshare.poller().subscription_count(), 2);
        assert!(clickshare.poller().is_polling());

        drop(in_use);
        assert_eq!(clickshare.poller().subscription_count(), 1);

        drop(idle);
        assert_eq!(clickshare.poller().subscription_count(), 0);
    }

    #[test]
    fn feedback_states_toggle_on_change_batches() {
        let states = FeedbackStates::default();
        for key in FeedbackKey::ALL {
            assert!(!states.value(key), "{key} should start false");
        }

        // First measurement: in_use=true, sharing=false.
        states.feedbacks_changed(&[FeedbackKey::InUse, FeedbackKey::Available]);
        assert!(states.value(FeedbackKey::InUse));
        assert!(states.value(FeedbackKey::Available));
        assert!(!states.value(FeedbackKey::Idle));
        assert!(!states.value(FeedbackKey::Sharing));

        // Sharing starts: sharing and available flip.
        states.feedbacks_changed(&[FeedbackKey::Sharing, FeedbackKey::Available]);
        assert!(states.value(FeedbackKey::Sharing));
        assert!(!states.value(FeedbackKey::Available));
        assert!(states.value(FeedbackKey::InUse));
    }

    #[test]
    fn health_reflects_latest_report() {
        let states = FeedbackStates::default();
        assert!(states.health().is_none());

        states.connection_health(ConnectionHealth::Failure("connection refused".into()));
        assert!(matches!(states.health(), Some(ConnectionHealth::Failure(_))));

        states.connection_health(ConnectionHealth::Ok);
        assert_eq!(states.health(), Some(ConnectionHealth::Ok));
    }

    #[tokio::test]
    async fn select_wallpaper_delegates_to_the_client() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/configuration/wallpapers/selected")
            .match_body(mockito::Matcher::Json(serde_json::json!({ "id": 1001 })))
            .with_status(200)
            .create_async()
            .await;

        let client = ClickShareClient::with_base_url(server.url(), "user", "pass").unwrap();
        let clickshare = ClickShare::with_client(client);

        clickshare.select_wallpaper(1001).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn wallpaper_rejection_surfaces_as_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PATCH", "/configuration/wallpapers/selected")
            .with_status(404)
            .create_async()
            .await;

        let client = ClickShareClient::with_base_url(server.url(), "user", "pass").unwrap();
        let clickshare = ClickShare::with_client(client);

        let err = clickshare.select_wallpaper(9999).await.unwrap_err();
        assert!(matches!(err, SdkError::Api(_)));
    }
}
