// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for T-Skylt boards.

use std::net::Ipv6Addr;

use reqwest::Client;
use reqwest::header::{CONNECTION, HOST, HeaderValue};

use crate::error::ProtocolError;
use crate::protocol::{DeviceRequest, DeviceResponse, Transport};

/// HTTP transport backed by `reqwest`.
///
/// Every call builds its own client with idle pooling disabled and sends
/// `Connection: close`, so no socket outlives a single attempt. The board's
/// network stack drops kept-alive sockets unpredictably and the board may
/// change address between two requests.
///
/// The `Host` header is set from [`DeviceRequest::host_header`] even when the
/// request is dialed to a raw IP.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use tskylt_lib::protocol::{DeviceRequest, HttpTransport, Transport};
///
/// # async fn example() -> Result<(), tskylt_lib::ProtocolError> {
/// let transport = HttpTransport::new();
/// let request = DeviceRequest::new("192.168.1.40", "skylt.local", "/", Duration::from_secs(20));
/// let response = transport.get(&request).await?;
/// println!("{} bytes", response.body().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    port: u16,
}

impl HttpTransport {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;

    /// Creates a transport that dials port 80.
    #[must_use]
    pub fn new() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds the URL for a request.
    fn build_url(&self, request: &DeviceRequest) -> String {
        let port_suffix = if self.port == Self::DEFAULT_PORT {
            String::new()
        } else {
            format!(":{}", self.port)
        };
        let address = request.address();
        if address.parse::<Ipv6Addr>().is_ok() {
            format!("http://[{address}]{port_suffix}{}", request.path())
        } else {
            format!("http://{address}{port_suffix}{}", request.path())
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, request: &DeviceRequest) -> Result<DeviceResponse, ProtocolError> {
        let url = self.build_url(request);
        let host = HeaderValue::from_str(request.host_header())
            .map_err(|_| ProtocolError::InvalidAddress(request.host_header().to_string()))?;

        let client = Client::builder()
            .timeout(request.timeout())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ProtocolError::Http)?;

        tracing::debug!(url = %url, host = %request.host_header(), "Sending HTTP request");

        let response = client
            .get(&url)
            .header(CONNECTION, HeaderValue::from_static("close"))
            .header(HOST, host)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProtocolError::Timeout(millis(request))
                } else if e.is_connect() {
                    ProtocolError::ConnectionFailed(e.to_string())
                } else {
                    ProtocolError::Http(e)
                }
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(ProtocolError::Status(status));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(status, bytes = body.len(), "Received HTTP response");

        Ok(DeviceResponse::new(status, body))
    }
}

fn millis(request: &DeviceRequest) -> u64 {
    u64::try_from(request.timeout().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn build_url_default_port() {
        let transport = HttpTransport::new();
        let req = DeviceRequest::new("192.168.1.40", "skylt.local", "?brightness=2", Duration::ZERO);
        assert_eq!(transport.build_url(&req), "http://192.168.1.40/?brightness=2");
    }

    #[test]
    fn build_url_custom_port() {
        let transport = HttpTransport::new().with_port(8080);
        let req = DeviceRequest::new("192.168.1.40", "skylt.local", "ping", Duration::ZERO);
        assert_eq!(transport.build_url(&req), "http://192.168.1.40:8080/ping");
    }

    #[test]
    fn build_url_brackets_ipv6() {
        let transport = HttpTransport::new().with_port(8080);
        let req = DeviceRequest::new("fe80::1", "skylt.local", "/", Duration::ZERO);
        let url = transport.build_url(&req);
        assert_eq!(url, "http://[fe80::1]:8080/");
        assert!(reqwest::Url::parse(&url).is_ok());
    }

    #[test]
    fn default_port() {
        assert_eq!(HttpTransport::default().port(), 80);
    }
}
