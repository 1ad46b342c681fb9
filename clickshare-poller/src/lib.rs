//! # clickshare-poller
//!
//! Subscription-gated status polling for ClickShare devices.
//!
//! The device has no push channel for occupancy state, so the SDK polls its
//! status endpoint — but only while someone is actually listening. This crate
//! implements that gate as a reference-counted counter in front of a single
//! cooperative polling task:
//!
//! 1. **Demand-driven start**: the first [`SubscriptionPoller::subscribe`]
//!    spawns the polling task
//! 2. **Reference counting**: further subscribes stack; each unsubscribe
//!    releases one unit of interest
//! 3. **Cooperative stop**: when interest hits zero the task notices at its
//!    next wake-up and exits, within one poll interval
//! 4. **Targeted notifications**: consumers are told exactly which
//!    [`FeedbackKey`]s flipped, never re-notified for identical results
//! 5. **Failure absorption**: a failed fetch becomes a
//!    [`ConnectionHealth::Failure`] report and the loop keeps going
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use clickshare_api::{ClickShareClient, DeviceConfig};
//! use clickshare_poller::SubscriptionPoller;
//!
//! let client = Arc::new(ClickShareClient::new(&config)?);
//! let poller = SubscriptionPoller::new(client, notifier);
//!
//! poller.subscribe();   // polling starts
//! // ... consume change notifications through the notifier ...
//! poller.unsubscribe(); // polling winds down within one interval
//! ```

pub mod feedback;
pub mod notifier;
pub mod poller;
pub mod source;

pub use feedback::FeedbackKey;
pub use notifier::{ConnectionHealth, StatusNotifier};
pub use poller::{SubscriptionPoller, POLL_INTERVAL};
pub use source::StatusSource;

// Re-export the status snapshot the poller diffs over
pub use clickshare_api::DeviceStatus;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ConnectionHealth, DeviceStatus, FeedbackKey, StatusNotifier, StatusSource,
        SubscriptionPoller, POLL_INTERVAL,
    };
}
