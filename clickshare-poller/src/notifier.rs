//! Notification sink the poller reports into

use crate::feedback::FeedbackKey;

/// Connection health derived from the most recent poll cycle
///
/// Recomputed on every cycle; it has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionHealth {
    /// The last status fetch succeeded
    Ok,
    /// The last status fetch failed, with a human-readable reason
    Failure(String),
}

impl ConnectionHealth {
    pub fn is_ok(&self) -> bool {
        matches!(self, ConnectionHealth::Ok)
    }
}

/// Sink for poll-cycle outcomes
///
/// The poller calls `connection_health` once per cycle and
/// `feedbacks_changed` only when at least one key actually flipped, so
/// implementors can refresh exactly the affected consumers instead of
/// everything on every poll.
pub trait StatusNotifier: Send + Sync {
    /// Health of the cycle that just completed
    fn connection_health(&self, health: ConnectionHealth);

    /// Keys whose truth value flipped in the cycle that just completed
    ///
    /// Never called with an empty slice.
    fn feedbacks_changed(&self, keys: &[FeedbackKey]);
}
