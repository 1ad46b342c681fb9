//! # clickshare-api
//!
//! REST client for the Barco ClickShare device API.
//!
//! The ClickShare exposes a small HTTPS API (HTTP Basic auth, self-signed
//! certificate, default port 4003). This crate covers the two calls the rest
//! of the SDK needs:
//!
//! - `GET /v2/configuration/system/status` — occupancy flags (`inUse`,
//!   `sharing`) plus uptime diagnostics
//! - `PATCH /v2/configuration/wallpapers/selected` — switch the active
//!   wallpaper by numeric id
//!
//! Every call is a fresh, independent request; credentials are fixed when the
//! client is built. Errors split into transport, HTTP-status and decode
//! failures — see [`ApiError`].

pub mod client;
pub mod config;
pub mod error;
pub mod status;

pub use client::ClickShareClient;
pub use config::{ConfigError, DeviceConfig, DEFAULT_PORT};
pub use error::{ApiError, Result};
pub use status::{DeviceStatus, SystemStatus};
