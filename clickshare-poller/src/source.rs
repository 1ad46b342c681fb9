//! Status-fetch seam between the poller and the REST client

use async_trait::async_trait;
use clickshare_api::{ClickShareClient, DeviceStatus};

/// Anything that can produce a fresh occupancy snapshot
///
/// The polling loop only ever sees this trait, which keeps the loop testable
/// against scripted fakes and keeps the HTTP details in `clickshare-api`.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the current device status
    ///
    /// Each call is an independent request; failures are per-call and carry
    /// no state into the next one.
    async fn fetch_status(&self) -> clickshare_api::Result<DeviceStatus>;
}

#[async_trait]
impl StatusSource for ClickShareClient {
    async fn fetch_status(&self) -> clickshare_api::Result<DeviceStatus> {
        Ok(self.system_status().await?.into())
    }
}
