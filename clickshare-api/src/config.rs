//! Device connection configuration

use std::net::Ipv4Addr;

use serde::Deserialize;
use thiserror::Error;

/// Default port of the ClickShare REST API
pub const DEFAULT_PORT: u16 = 4003;

/// Connection settings for a single ClickShare unit
///
/// Credentials are fixed for the lifetime of a client built from this config;
/// there is no mid-session rotation.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// IPv4 address of the unit
    pub host: Ipv4Addr,

    /// REST API port
    /// Default: 4003
    #[serde(default = "default_port")]
    pub port: u16,

    /// API username
    pub username: String,

    /// API password
    pub password: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Configuration validation error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Port must be in the range 1-65535")]
    InvalidPort,

    #[error("API username must not be empty")]
    MissingUsername,

    #[error("API password must not be empty")]
    MissingPassword,
}

impl DeviceConfig {
    /// Create a config for the default API port
    pub fn new(
        host: Ipv4Addr,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host,
            port: DEFAULT_PORT,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check the config for values the device would never accept
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.username.is_empty() {
            return Err(ConfigError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(ConfigError::MissingPassword);
        }
        Ok(())
    }

    /// Base URL of the versioned REST API on this unit
    pub fn base_url(&self) -> String {
        format!("https://{}:{}/v2", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_applies_when_omitted() {
        let config: DeviceConfig = serde_json::from_str(
            r#"{"host": "192.168.1.50", "username": "api", "password": "secret"}"#,
        )
        .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.base_url(), "https://192.168.1.50:4003/v2");
    }

    #[test]
    fn explicit_port_overrides_default() {
        let config: DeviceConfig = serde_json::from_str(
            r#"{"host": "10.0.0.2", "port": 4100, "username": "api", "password": "secret"}"#,
        )
        .unwrap();
        assert_eq!(config.port, 4100);
    }

    #[test]
    fn validation_rejects_port_zero_and_empty_credentials() {
        let mut config = DeviceConfig::new(Ipv4Addr::new(1, 2, 3, 4), "user", "pass");
        assert!(config.validate().is_ok());

        config.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPort)));

        config.port = DEFAULT_PORT;
        config.username.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingUsername)
        ));

        config.username = "user".into();
        config.password.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPassword)
        ));
    }
}
