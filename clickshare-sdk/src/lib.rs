//! # ClickShare SDK
//!
//! Monitor and control a Barco ClickShare presentation unit over its REST
//! API:
//!
//! ```rust,ignore
//! use clickshare_sdk::{ClickShare, DeviceConfig, FeedbackKey};
//!
//! let config = DeviceConfig::new("192.168.1.50".parse()?, "api", "secret");
//! let clickshare = ClickShare::new(config)?;
//!
//! // Feedback signals are polled only while subscribed.
//! let available = clickshare.subscribe_feedback(FeedbackKey::Available);
//! println!("room available: {}", available.value());
//!
//! // Commands are independent of polling.
//! clickshare.select_wallpaper(1001).await?;
//! ```
//!
//! ## Key Features
//!
//! - **Demand-driven polling**: the status endpoint is polled only while at
//!   least one feedback subscription is alive
//! - **Targeted change notifications**: consumers learn exactly which of the
//!   four signals (`in-use`, `sharing`, `idle`, `available`) flipped
//! - **Failure absorption**: a flaky network degrades connection health, it
//!   never kills the polling loop or clears known state
//! - **One command**: switch the active wallpaper by numeric id

pub mod error;
pub mod logging;
pub mod system;

pub use error::SdkError;
pub use system::{ClickShare, FeedbackStates, FeedbackSubscription};

// Re-export the building blocks for host integrations that wire their own
// adapter layer.
pub use clickshare_api::{
    ApiError, ClickShareClient, ConfigError, DeviceConfig, DeviceStatus, SystemStatus,
    DEFAULT_PORT,
};
pub use clickshare_poller::{
    ConnectionHealth, FeedbackKey, StatusNotifier, StatusSource, SubscriptionPoller,
    POLL_INTERVAL,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClickShare, ConnectionHealth, DeviceConfig, DeviceStatus, FeedbackKey,
        FeedbackSubscription, SdkError,
    };
}
