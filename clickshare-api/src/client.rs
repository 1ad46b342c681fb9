use std::time::Duration;

use crate::{ApiError, DeviceConfig, Result, SystemStatus};

/// Request timeout for a single API call
///
/// Status polls run on a sub-second cadence; a call that has not answered
/// within this window is reported as a transport failure rather than left
/// hanging.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A client for the ClickShare REST API
///
/// Each method issues one fresh, independent HTTP request; there is no
/// session or connection state the caller has to manage. Credentials are
/// fixed at construction.
///
/// # Example
///
/// ```rust,no_run
/// use clickshare_api::{ClickShareClient, DeviceConfig};
///
/// # async fn demo() -> clickshare_api::Result<()> {
/// let config = DeviceConfig::new("192.168.1.50".parse().unwrap(), "api", "secret");
/// let client = ClickShareClient::new(&config)?;
///
/// let status = client.system_status().await?;
/// println!("in use: {}, sharing: {}", status.in_use, status.sharing);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClickShareClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl ClickShareClient {
    /// Create a client for the unit described by `config`
    ///
    /// Talks HTTPS to `https://{host}:{port}/v2` with HTTP Basic
    /// authentication. ClickShare units ship a self-signed certificate, so
    /// certificate verification is disabled for this client.
    pub fn new(config: &DeviceConfig) -> Result<Self> {
        Self::with_base_url(config.base_url(), &config.username, &config.password)
    }

    /// Create a client against an explicit base URL
    ///
    /// Useful when the unit sits behind a reverse proxy, and for tests that
    /// point the client at a local mock server. `base_url` should include the
    /// `/v2` prefix and no trailing slash.
    pub fn with_base_url(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Transport)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            http,
            base_url,
            username: username.into(),
            password: password.into(),
        })
    }

    /// Fetch the current system status of the unit
    ///
    /// `GET {base}/configuration/system/status`. Non-2xx responses and
    /// undecodable bodies are failures; the caller decides what a failed
    /// fetch means for its own state.
    pub async fn system_status(&self) -> Result<SystemStatus> {
        let url = format!("{}/configuration/system/status", self.base_url);
        tracing::trace!(%url, "fetching system status");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        response.json::<SystemStatus>().await.map_err(ApiError::Decode)
    }

    /// Switch the unit's active wallpaper
    ///
    /// `PATCH {base}/configuration/wallpapers/selected` with body
    /// `{"id": <id>}`. Built-in wallpapers have ids 1 and 2; user-uploaded
    /// wallpapers start at 1001. The device rejects unknown ids itself, so no
    /// range check happens here.
    pub async fn select_wallpaper(&self, id: u32) -> Result<()> {
        let url = format!("{}/configuration/wallpapers/selected", self.base_url);
        tracing::debug!(%url, id, "selecting wallpaper");

        let response = self
            .http
            .patch(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&serde_json::json!({ "id": id }))
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        Ok(())
    }
}
