// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configured host classification.

use std::fmt;
use std::net::Ipv4Addr;

use crate::error::ProtocolError;

/// The host a board was configured with.
///
/// A literal IPv4 address is *static*: it is always dialed as is and never
/// re-resolved. Anything else is treated as a hostname.
///
/// # Examples
///
/// ```
/// use tskylt_lib::connection::HostAddress;
///
/// let ip = HostAddress::parse("192.168.1.40").unwrap();
/// assert!(ip.is_static());
///
/// let name = HostAddress::parse("skylt.local").unwrap();
/// assert!(!name.is_static());
///
/// assert!(HostAddress::parse("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAddress {
    host: String,
    is_static: bool,
}

impl HostAddress {
    /// Classifies a configured host string.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty or
    /// contains whitespace, a scheme, a path or a port. The port is set
    /// separately, e.g. with [`DeviceBuilder::with_port`](crate::DeviceBuilder::with_port).
    pub fn parse(host: &str) -> Result<Self, ProtocolError> {
        let host = host.trim();
        if !host.contains("://") && host.contains(':') {
            return Err(ProtocolError::InvalidAddress(format!(
                "{host} (the port is configured separately)"
            )));
        }
        if host.is_empty()
            || host.contains(char::is_whitespace)
            || host.contains("://")
            || host.contains('/')
        {
            return Err(ProtocolError::InvalidAddress(host.to_string()));
        }

        Ok(Self {
            host: host.to_string(),
            is_static: host.parse::<Ipv4Addr>().is_ok(),
        })
    }

    /// Returns the host as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.host
    }

    /// Returns `true` if the host is a literal IPv4 address.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.is_static
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_is_static() {
        assert!(HostAddress::parse("10.0.0.5").unwrap().is_static());
    }

    #[test]
    fn hostname_is_not_static() {
        let host = HostAddress::parse(" skylt.local ").unwrap();
        assert!(!host.is_static());
        assert_eq!(host.as_str(), "skylt.local");
    }

    #[test]
    fn malformed_ipv4_is_a_hostname() {
        assert!(!HostAddress::parse("10.0.0.256").unwrap().is_static());
    }

    #[test]
    fn rejects_urls() {
        assert!(HostAddress::parse("http://skylt.local").is_err());
        assert!(HostAddress::parse("skylt.local/status").is_err());
        assert!(HostAddress::parse("").is_err());
    }

    #[test]
    fn rejects_embedded_port() {
        let err = HostAddress::parse("skylt.local:8080").unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidAddress(ref msg) if msg.contains("port")));
        assert!(HostAddress::parse("10.0.0.5:80").is_err());
    }
}
