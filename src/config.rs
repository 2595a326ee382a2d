// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device configuration.
//!
//! A board is configured with little more than its host. Everything else
//! has a default, so the smallest valid JSON document is
//! `{"host": "skylt.local"}`. Durations are written in seconds.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use tskylt_lib::config::DeviceConfig;
//!
//! let config = DeviceConfig::from_json(r#"{
//!     "host": "skylt.local",
//!     "poll_interval": 30,
//!     "retry": { "attempts": 5, "backoff": 0.5 }
//! }"#).unwrap();
//!
//! assert_eq!(config.port, 80);
//! assert_eq!(config.poll_interval, Duration::from_secs(30));
//! assert_eq!(config.retry.attempts, 5);
//! assert_eq!(config.retry.backoff, Duration::from_millis(500));
//! assert_eq!(config.retry.history_size, 5);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::connection::{HostAddress, RetryPolicy};
use crate::error::ParseError;
use crate::protocol::HttpTransport;

/// Default interval between two refreshes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Configuration of one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Hostname or literal IPv4 address.
    pub host: String,
    /// HTTP port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Interval between two refreshes.
    #[serde(default = "default_poll_interval", with = "seconds")]
    pub poll_interval: Duration,
    /// Retry and timeout settings.
    #[serde(default, with = "retry_policy")]
    pub retry: RetryPolicy,
}

impl DeviceConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: HttpTransport::DEFAULT_PORT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            retry: RetryPolicy::default(),
        }
    }

    /// Sets the HTTP port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the refresh interval.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Reads and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` for malformed documents and
    /// `ParseError::InvalidValue` if [`validate`](Self::validate) fails.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot express constraints for.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidValue` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ParseError> {
        HostAddress::parse(&self.host).map_err(|e| invalid("host", e.to_string()))?;

        if self.poll_interval.is_zero() {
            return Err(invalid("poll_interval", "must be positive"));
        }
        if self.retry.attempts == 0 {
            return Err(invalid("retry.attempts", "must be at least 1"));
        }
        if self.retry.history_size == 0 {
            return Err(invalid("retry.history_size", "must be at least 1"));
        }
        Ok(())
    }

    /// Returns the parsed host.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidValue` if the host is malformed.
    pub fn host_address(&self) -> Result<HostAddress, ParseError> {
        HostAddress::parse(&self.host).map_err(|e| invalid("host", e.to_string()))
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ParseError {
    ParseError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn default_port() -> u16 {
    HttpTransport::DEFAULT_PORT
}

fn default_poll_interval() -> Duration {
    DEFAULT_POLL_INTERVAL
}

/// Durations as (possibly fractional) seconds.
mod seconds {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

/// [`RetryPolicy`] as a JSON object with every field optional.
mod retry_policy {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::connection::RetryPolicy;

    #[derive(Serialize, Deserialize)]
    #[serde(default)]
    struct Document {
        attempts: u32,
        #[serde(with = "super::seconds")]
        backoff: Duration,
        #[serde(with = "super::seconds")]
        full_timeout: Duration,
        #[serde(with = "super::seconds")]
        probe_timeout: Duration,
        history_size: usize,
    }

    impl Default for Document {
        fn default() -> Self {
            RetryPolicy::default().into()
        }
    }

    impl From<RetryPolicy> for Document {
        fn from(policy: RetryPolicy) -> Self {
            Self {
                attempts: policy.attempts,
                backoff: policy.backoff,
                full_timeout: policy.full_timeout,
                probe_timeout: policy.probe_timeout,
                history_size: policy.history_size,
            }
        }
    }

    pub(super) fn serialize<S: Serializer>(value: &RetryPolicy, serializer: S) -> Result<S::Ok, S::Error> {
        Document::from(value.clone()).serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RetryPolicy, D::Error> {
        let doc = Document::deserialize(deserializer)?;
        Ok(RetryPolicy {
            attempts: doc.attempts,
            backoff: doc.backoff,
            full_timeout: doc.full_timeout,
            probe_timeout: doc.probe_timeout,
            history_size: doc.history_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_uses_defaults() {
        let config = DeviceConfig::from_json(r#"{"host": "10.0.0.5"}"#).unwrap();

        assert_eq!(config, DeviceConfig::new("10.0.0.5"));
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn host_is_required() {
        let err = DeviceConfig::from_json(r#"{"port": 8080}"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn empty_host_is_rejected() {
        let err = DeviceConfig::from_json(r#"{"host": " "}"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { ref field, .. } if field == "host"));
    }

    #[test]
    fn zero_attempts_are_rejected() {
        let err = DeviceConfig::from_json(r#"{"host": "skylt.local", "retry": {"attempts": 0}}"#)
            .unwrap_err();
        assert!(
            matches!(err, ParseError::InvalidValue { ref field, .. } if field == "retry.attempts")
        );
    }

    #[test]
    fn negative_duration_is_rejected() {
        let err = DeviceConfig::from_json(r#"{"host": "skylt.local", "poll_interval": -1}"#)
            .unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn serializes_durations_as_seconds() {
        let config = DeviceConfig::new("skylt.local").with_poll_interval(Duration::from_secs(90));
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["poll_interval"], 90.0);
        assert_eq!(json["retry"]["probe_timeout"], 4.0);

        let back: DeviceConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn host_address_classifies() {
        let config = DeviceConfig::new("192.168.1.40").with_port(8080);
        assert!(config.host_address().unwrap().is_static());
        assert_eq!(config.port, 8080);
    }
}
