// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire-level access to a T-Skylt board.
//!
//! The board speaks plain HTTP/1.1: `GET /` returns the status page and
//! `GET /<command>` applies a setting. This module provides the two seams the
//! connection manager is built on:
//!
//! - [`Transport`]: performs exactly one GET against one address
//! - [`Resolver`]: turns the configured hostname into an address
//!
//! [`HttpTransport`] and [`SystemResolver`] are the production implementations.

mod http;
mod resolver;

use std::future::Future;
use std::time::Duration;

pub use http::HttpTransport;
pub use resolver::SystemResolver;

use crate::error::ProtocolError;

/// A single GET request against one concrete address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRequest {
    address: String,
    host_header: String,
    path: String,
    timeout: Duration,
}

impl DeviceRequest {
    /// Creates a request.
    ///
    /// `path` is the part after the address; a missing leading `/` is added,
    /// so both `"?onoff=active"` and `"/?onoff=active"` address the root page.
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        host_header: impl Into<String>,
        path: &str,
        timeout: Duration,
    ) -> Self {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self {
            address: address.into(),
            host_header: host_header.into(),
            path,
            timeout,
        }
    }

    /// Returns the address the request is dialed to.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the value sent in the `Host` header.
    #[must_use]
    pub fn host_header(&self) -> &str {
        &self.host_header
    }

    /// Returns the request path, always starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the timeout for this attempt.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Response to a [`DeviceRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceResponse {
    status: u16,
    body: String,
}

impl DeviceResponse {
    /// Creates a response with the given status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response and returns its body.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }

    /// Returns `true` if the status is below 400.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// Performs single HTTP exchanges with the board.
///
/// Implementations must not reuse connections between calls and must not
/// retry on their own; retrying is the connection manager's job.
pub trait Transport: Send + Sync {
    /// Sends one GET request.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the exchange fails or the device answers
    /// with a status of 400 or above.
    fn get(
        &self,
        request: &DeviceRequest,
    ) -> impl Future<Output = Result<DeviceResponse, ProtocolError>> + Send;
}

/// Resolves a hostname to an IP address.
pub trait Resolver: Send + Sync {
    /// Looks up `host` and returns one address as a string.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Resolution` if the lookup fails or yields
    /// no address.
    fn resolve(&self, host: &str) -> impl Future<Output = Result<String, ProtocolError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_path_gets_leading_slash() {
        let req = DeviceRequest::new("10.0.0.5", "skylt.local", "?onoff=active", Duration::ZERO);
        assert_eq!(req.path(), "/?onoff=active");

        let req = DeviceRequest::new("10.0.0.5", "skylt.local", "/", Duration::ZERO);
        assert_eq!(req.path(), "/");

        let req = DeviceRequest::new("10.0.0.5", "skylt.local", "update?update=true", Duration::ZERO);
        assert_eq!(req.path(), "/update?update=true");
    }

    #[test]
    fn response_success_threshold() {
        assert!(DeviceResponse::new(200, "").is_success());
        assert!(DeviceResponse::new(302, "").is_success());
        assert!(!DeviceResponse::new(400, "").is_success());
        assert!(!DeviceResponse::new(500, "").is_success());
    }
}
