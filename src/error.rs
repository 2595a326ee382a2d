// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `tskylt_lib` library.
//!
//! Errors are split by the layer that produces them:
//!
//! - [`ProtocolError`]: a single HTTP attempt or name lookup failed. These are
//!   swallowed by the connection manager while it still has fallbacks left.
//! - [`Error`]: the terminal outcome of a whole operation, after every
//!   recovery phase was exhausted.
//! - [`ValueError`]: a command value was rejected before anything was sent.
//! - [`ParseError`]: a configuration document could not be read. Status page
//!   parsing never fails; missing fields degrade to their defaults.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Every address the connection manager could try has failed.
    #[error("device unreachable at {address}: {source}")]
    Unreachable {
        /// The last address a request was sent to.
        address: String,
        /// The failure of the last attempt.
        #[source]
        source: ProtocolError,
    },

    /// Re-resolving the configured hostname failed.
    #[error("failed to resolve {host}: {message}")]
    Resolution {
        /// The hostname that was looked up.
        host: String,
        /// Description of the lookup failure.
        message: String,
    },

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during a single protocol exchange.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while reading configuration.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns `true` if this error means the device could not be reached.
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            Self::Unreachable { .. } | Self::Resolution { .. } | Self::Protocol(_)
        )
    }
}

/// Errors related to a single HTTP attempt or name lookup.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with an HTTP error status (400 or above).
    #[error("device answered with HTTP {0}")]
    Status(u16),

    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Name resolution failed.
    #[error("failed to resolve {host}: {message}")]
    Resolution {
        /// The hostname that was looked up.
        host: String,
        /// Description of the lookup failure.
        message: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when building a command from an invalid value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A time of day was not in `HH:MM` form.
    #[error("invalid time of day: {0}")]
    InvalidTime(String),

    /// A selection value does not match any known option.
    #[error("invalid option for {setting}: {value}")]
    InvalidOption {
        /// The setting the option was meant for.
        setting: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Errors related to parsing configuration documents.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
