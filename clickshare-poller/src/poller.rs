//! Subscription-gated polling loop
//!
//! The poller owns a reference-counted interest gate: the first subscriber
//! starts a background polling task, and the task stops itself once interest
//! drops back to zero. Stopping is cooperative — the loop re-checks the
//! desired state at the top of every iteration, so teardown latency is
//! bounded by one poll interval.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use clickshare_api::DeviceStatus;

use crate::feedback::FeedbackKey;
use crate::notifier::{ConnectionHealth, StatusNotifier};
use crate::source::StatusSource;

/// Fixed cadence of the polling loop
///
/// Also the effective retry cadence: failed cycles wait the same interval as
/// successful ones.
pub const POLL_INTERVAL: Duration = Duration::from_millis(750);

/// State shared between subscribers and the polling task
#[derive(Debug, Default)]
struct PollerInner {
    /// Net interest count across all consumers
    subscriptions: usize,
    /// Desired state, derived from the interest count
    should_poll: bool,
    /// Whether a polling task is currently alive
    is_polling: bool,
    /// Last successfully observed status, retained across fetch failures
    last_status: Option<DeviceStatus>,
}

/// Polls a [`StatusSource`] while at least one consumer is interested
///
/// `subscribe`/`unsubscribe` maintain the interest count. A 0→1 transition
/// spawns the polling task; when the count returns to 0 the task observes the
/// flipped flag at its next wake-up and exits on its own. At most one task is
/// ever in flight per poller instance.
///
/// Per-cycle failures are absorbed: they become a
/// [`ConnectionHealth::Failure`] report and the loop keeps going with the
/// previous status intact. Only loss of interest stops the loop.
pub struct SubscriptionPoller {
    inner: Arc<Mutex<PollerInner>>,
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn StatusNotifier>,
    interval: Duration,
}

impl SubscriptionPoller {
    /// Create a poller with the standard [`POLL_INTERVAL`]
    pub fn new(source: Arc<dyn StatusSource>, notifier: Arc<dyn StatusNotifier>) -> Self {
        Self::with_interval(source, notifier, POLL_INTERVAL)
    }

    /// Create a poller with a custom interval
    pub fn with_interval(
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn StatusNotifier>,
        interval: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PollerInner::default())),
            source,
            notifier,
            interval,
        }
    }

    /// Register one unit of interest
    ///
    /// Starts the polling task if none is running. Must be called from within
    /// a tokio runtime, since the task is spawned onto it. Repeated calls
    /// stack; each needs a matching [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&self) {
        let start = {
            let mut inner = self.inner.lock();
            inner.subscriptions += 1;
            inner.should_poll = true;
            tracing::debug!(subscriptions = inner.subscriptions, "feedback subscribed");

            if inner.is_polling {
                false
            } else {
                inner.is_polling = true;
                true
            }
        };

        if start {
            tokio::spawn(poll_loop(
                Arc::clone(&self.inner),
                Arc::clone(&self.source),
                Arc::clone(&self.notifier),
                self.interval,
            ));
        }
    }

    /// Release one unit of interest
    ///
    /// Callers must not release more than they subscribed; an underflow is
    /// logged and clamped at zero rather than enforced. Reaching zero does
    /// not stop the task directly — the task notices at its next wake-up.
    pub fn unsubscribe(&self) {
        let mut inner = self.inner.lock();
        if inner.subscriptions == 0 {
            tracing::warn!("unsubscribe called with no matching subscribe");
        }
        inner.subscriptions = inner.subscriptions.saturating_sub(1);
        inner.should_poll = inner.subscriptions > 0;
        tracing::debug!(subscriptions = inner.subscriptions, "feedback unsubscribed");
    }

    /// Stop polling regardless of the interest count
    ///
    /// Teardown convenience: the in-flight cycle exits naturally at its next
    /// wake-up, within one interval. A later `subscribe` starts fresh.
    pub fn shutdown(&self) {
        self.inner.lock().should_poll = false;
    }

    /// Current net interest count
    pub fn subscription_count(&self) -> usize {
        self.inner.lock().subscriptions
    }

    /// Whether a polling task is currently alive
    pub fn is_polling(&self) -> bool {
        self.inner.lock().is_polling
    }

    /// Last successfully observed status, if any
    pub fn last_status(&self) -> Option<DeviceStatus> {
        self.inner.lock().last_status
    }
}

impl Drop for SubscriptionPoller {
    fn drop(&mut self) {
        self.inner.lock().should_poll = false;
    }
}

/// One polling task: fetch, diff, notify, sleep, repeat
async fn poll_loop(
    inner: Arc<Mutex<PollerInner>>,
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn StatusNotifier>,
    interval: Duration,
) {
    tracing::debug!("status polling started");

    loop {
        {
            // Observing the stop flag and clearing is_polling must happen in
            // the same critical section, otherwise a subscribe landing
            // between them would see a task that is about to die and not
            // start a new one.
            let mut state = inner.lock();
            if !state.should_poll {
                state.is_polling = false;
                break;
            }
        }

        match source.fetch_status().await {
            Ok(status) => {
                notifier.connection_health(ConnectionHealth::Ok);

                let changed = {
                    let mut state = inner.lock();
                    let changed = FeedbackKey::changed_keys(state.last_status, status);
                    state.last_status = Some(status);
                    changed
                };

                if !changed.is_empty() {
                    tracing::debug!(?changed, "device status changed");
                    notifier.feedbacks_changed(&changed);
                }
            }
            Err(e) => {
                // Stale status is kept; one transient failure must not
                // flicker feedback state.
                tracing::warn!(error = %e, "status fetch failed");
                notifier.connection_health(ConnectionHealth::Failure(e.to_string()));
            }
        }

        tokio::time::sleep(interval).await;
    }

    tracing::debug!("status polling stopped");
}
