//! Response bodies.
//!
//! Both records are built per request from a single timestamp and
//! discarded once serialized.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

/// Reported by the health check on every request.
pub const SERVICE_STATUS: &str = "ok";

/// Service version reported by the health check.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    /// RFC3339 with second precision, `Z` for a zero offset.
    pub timestamp: String,
}

impl HealthStatus {
    pub fn at(now: DateTime<FixedOffset>) -> Self {
        Self {
            status: SERVICE_STATUS.to_string(),
            version: SERVICE_VERSION.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingMessage {
    pub message: String,
}

impl GreetingMessage {
    pub fn at(now: DateTime<FixedOffset>) -> Self {
        Self {
            message: format!("Hello World. Now time is {}", now.format("%H:%M:%S")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn health_status_at_utc() {
        let health = HealthStatus::at(instant("2024-01-01T12:00:00Z"));
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, "1.0.0");
        assert_eq!(health.timestamp, "2024-01-01T12:00:00Z");
    }

    #[test]
    fn health_status_keeps_offset_and_drops_fraction() {
        let health = HealthStatus::at(instant("2024-01-01T15:00:00.123456+03:00"));
        assert_eq!(health.timestamp, "2024-01-01T15:00:00+03:00");
    }

    #[test]
    fn health_status_serializes_in_field_order() {
        let health = HealthStatus::at(instant("2024-01-01T12:00:00Z"));
        assert_eq!(
            serde_json::to_string(&health).unwrap(),
            r#"{"status":"ok","version":"1.0.0","timestamp":"2024-01-01T12:00:00Z"}"#
        );
    }

    #[test]
    fn greeting_uses_local_wall_time() {
        let greeting = GreetingMessage::at(instant("2024-06-01T14:30:05+02:00"));
        assert_eq!(greeting.message, "Hello World. Now time is 14:30:05");
    }

    #[test]
    fn greeting_pads_single_digits() {
        let greeting = GreetingMessage::at(instant("2024-06-01T09:05:07Z"));
        assert_eq!(greeting.message, "Hello World. Now time is 09:05:07");
        assert_eq!(
            serde_json::to_string(&greeting).unwrap(),
            r#"{"message":"Hello World. Now time is 09:05:07"}"#
        );
    }
}
