//! Status types returned by the device

use serde::Deserialize;

/// Full body of the `GET /v2/configuration/system/status` response
///
/// Only `inUse` and `sharing` drive feedback state; the remaining fields are
/// carried as reported by the firmware and tolerated when absent, so a
/// firmware revision that drops one of them does not turn every poll into a
/// decode failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    /// Seconds since the unit last booted
    #[serde(default)]
    pub current_uptime: u64,

    /// Device-reported error code (`"Ok"` when healthy)
    #[serde(default)]
    pub error_code: String,

    /// Device-reported error message
    #[serde(default)]
    pub error_message: String,

    /// Timestamp of first use, as reported by the device
    #[serde(default)]
    pub first_used: String,

    /// True if the app or a button is connected to the unit
    pub in_use: bool,

    /// True if someone is streaming a desktop to the unit
    pub sharing: bool,

    /// Lifetime uptime in seconds
    #[serde(default)]
    pub total_uptime: u64,
}

/// The two-boolean occupancy snapshot derived from a status response
///
/// Produced fresh on every successful poll and compared by value against the
/// previous snapshot to detect change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceStatus {
    /// True if the app or a button is connected to the unit
    pub in_use: bool,
    /// True if someone is streaming a desktop to the unit
    pub sharing: bool,
}

impl From<&SystemStatus> for DeviceStatus {
    fn from(status: &SystemStatus) -> Self {
        Self {
            in_use: status.in_use,
            sharing: status.sharing,
        }
    }
}

impl From<SystemStatus> for DeviceStatus {
    fn from(status: SystemStatus) -> Self {
        Self::from(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_status_body() {
        let body = r#"{
            "errorCode": "Ok",
            "errorMessage": " ",
            "currentUptime": 1809,
            "totalUptime": 2291,
            "firstUsed": "2022-02-02T10:49:50",
            "inUse": true,
            "sharing": false
        }"#;

        let status: SystemStatus = serde_json::from_str(body).unwrap();
        assert!(status.in_use);
        assert!(!status.sharing);
        assert_eq!(status.current_uptime, 1809);
        assert_eq!(status.error_code, "Ok");
    }

    #[test]
    fn tolerates_missing_diagnostic_fields() {
        let body = r#"{"inUse": false, "sharing": true}"#;
        let status: SystemStatus = serde_json::from_str(body).unwrap();
        assert!(!status.in_use);
        assert!(status.sharing);
        assert_eq!(status.total_uptime, 0);
    }

    #[test]
    fn missing_flags_are_a_decode_failure() {
        let body = r#"{"errorCode": "Ok"}"#;
        assert!(serde_json::from_str::<SystemStatus>(body).is_err());
    }

    #[test]
    fn device_status_compares_by_value() {
        let a = DeviceStatus {
            in_use: true,
            sharing: false,
        };
        let b = DeviceStatus {
            in_use: true,
            sharing: false,
        };
        let c = DeviceStatus {
            in_use: true,
            sharing: true,
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
