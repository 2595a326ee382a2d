// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hostname resolution through the operating system resolver.

use std::net::{SocketAddr, ToSocketAddrs};

use crate::error::ProtocolError;
use crate::protocol::Resolver;

/// Resolver backed by the system's `getaddrinfo`.
///
/// The lookup blocks, so it runs on tokio's blocking pool and never stalls
/// the async workers. Only IPv4 results are used since the board has no
/// IPv6 stack; a name with only IPv6 records fails to resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Creates a new system resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<String, ProtocolError> {
        let owned = host.to_string();
        let lookup = tokio::task::spawn_blocking(move || {
            (owned.as_str(), 0)
                .to_socket_addrs()
                .map(|addrs| addrs.collect::<Vec<SocketAddr>>())
        })
        .await
        .map_err(|e| ProtocolError::Resolution {
            host: host.to_string(),
            message: e.to_string(),
        })?;

        let addrs = lookup.map_err(|e| ProtocolError::Resolution {
            host: host.to_string(),
            message: e.to_string(),
        })?;

        pick_address(&addrs).ok_or_else(|| ProtocolError::Resolution {
            host: host.to_string(),
            message: format!("no IPv4 address among {} results", addrs.len()),
        })
    }
}

/// Picks the first IPv4 address.
fn pick_address(addrs: &[SocketAddr]) -> Option<String> {
    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .map(|a| a.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_address_prefers_ipv4() {
        let addrs: Vec<SocketAddr> = vec![
            "[fe80::1]:0".parse().unwrap(),
            "192.168.1.40:0".parse().unwrap(),
        ];
        assert_eq!(pick_address(&addrs), Some("192.168.1.40".to_string()));
    }

    #[test]
    fn pick_address_ignores_ipv6_only_results() {
        let addrs: Vec<SocketAddr> = vec!["[fe80::1]:0".parse().unwrap()];
        assert_eq!(pick_address(&addrs), None);
    }

    #[tokio::test]
    async fn ipv6_literal_fails_to_resolve() {
        let err = SystemResolver::new().resolve("::1").await.unwrap_err();
        assert!(matches!(err, ProtocolError::Resolution { ref message, .. } if message.contains("IPv4")));
    }

    #[test]
    fn pick_address_empty() {
        assert_eq!(pick_address(&[]), None);
    }

    #[tokio::test]
    async fn resolves_ip_literal_without_network() {
        let resolver = SystemResolver::new();
        let ip = resolver.resolve("127.0.0.1").await.unwrap();
        assert_eq!(ip, "127.0.0.1");
    }
}
