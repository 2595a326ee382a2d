// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The resilient request sequence.

use std::sync::OnceLock;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::error::{Error, ProtocolError, Result};
use crate::page::parse_status_page;
use crate::protocol::{DeviceRequest, DeviceResponse, HttpTransport, Resolver, SystemResolver, Transport};
use crate::state::{StateSnapshot, UNKNOWN_FIRMWARE};

use super::{HostAddress, KnownIps, RetryPolicy};

/// Path of the status page.
const STATUS_PATH: &str = "/";

/// A move of the active address made by one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressChange {
    /// The address used before the move.
    pub from: String,
    /// The address adopted.
    pub to: String,
}

/// Addressing state shared by all operations.
#[derive(Debug)]
struct Addressing {
    active_ip: String,
    known_ips: KnownIps,
    changes: Vec<AddressChange>,
}

/// Owns the addressing state of one board and runs every request through
/// the recovery phases.
///
/// An operation first retries the active address with a fixed backoff. If
/// that fails and the host is a hostname, it probes previously successful
/// addresses with a short timeout, then re-resolves the hostname and tries
/// the fresh address once more. A static host fails right after the first
/// phase.
///
/// Refreshes and commands share one lock, so at most one exchange with the
/// board is in flight at any time. There is no timeout spanning the whole
/// sequence; wrap calls in [`tokio::time::timeout`] if one is needed.
///
/// # Examples
///
/// ```no_run
/// use tskylt_lib::connection::{ConnectionManager, HostAddress, RetryPolicy};
///
/// # async fn example() -> tskylt_lib::Result<()> {
/// let host = HostAddress::parse("skylt.local")?;
/// let manager = ConnectionManager::http(host, RetryPolicy::default(), 80);
///
/// manager.resolve_initial_address().await?;
/// let snapshot = manager.refresh().await?;
/// manager.send_command("?brightness=2").await?;
///
/// println!("{} via {}", snapshot.firmware_version(), manager.active_ip());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConnectionManager<T = HttpTransport, R = SystemResolver> {
    host: HostAddress,
    policy: RetryPolicy,
    transport: T,
    resolver: R,
    lock: Mutex<()>,
    addressing: RwLock<Addressing>,
    firmware_version: OnceLock<String>,
}

impl ConnectionManager {
    /// Creates a manager using the HTTP transport and the system resolver.
    #[must_use]
    pub fn http(host: HostAddress, policy: RetryPolicy, port: u16) -> Self {
        Self::new(
            host,
            policy,
            HttpTransport::new().with_port(port),
            SystemResolver::new(),
        )
    }
}

impl<T: Transport, R: Resolver> ConnectionManager<T, R> {
    /// Creates a manager with explicit transport and resolver.
    ///
    /// The active address starts as the configured host. A static host is
    /// also its only remembered address.
    #[must_use]
    pub fn new(host: HostAddress, policy: RetryPolicy, transport: T, resolver: R) -> Self {
        let mut known_ips = KnownIps::new(policy.history_size);
        if host.is_static() {
            known_ips.promote(host.as_str());
        }

        Self {
            addressing: RwLock::new(Addressing {
                active_ip: host.as_str().to_string(),
                changes: Vec::new(),
                known_ips,
            }),
            host,
            policy,
            transport,
            resolver,
            lock: Mutex::new(()),
            firmware_version: OnceLock::new(),
        }
    }

    /// Resolves a hostname once and seeds the active address with it.
    ///
    /// Does nothing for a static host. Meant to run before the first
    /// refresh so that one does not start by failing against the raw
    /// hostname.
    ///
    /// # Errors
    ///
    /// Returns `Error::Resolution` if the lookup fails; the active address
    /// is then left at the hostname.
    pub async fn resolve_initial_address(&self) -> Result<()> {
        if self.host.is_static() {
            return Ok(());
        }

        let _guard = self.lock.lock().await;
        let ip = self.resolve().await?;
        tracing::info!(host = %self.host, address = %ip, "Resolved initial address");
        self.adopt(&ip);
        Ok(())
    }

    /// Fetches and parses the status page.
    ///
    /// The firmware version is captured from the first page that shows one
    /// and reported unchanged afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error once every recovery phase has failed.
    pub async fn refresh(&self) -> Result<StateSnapshot> {
        let response = self.execute(STATUS_PATH).await?;
        let parsed = parse_status_page(response.body());

        if let Some(version) = parsed.firmware_version
            && self.firmware_version.set(version).is_ok()
        {
            tracing::debug!(version = %self.firmware_version(), "Captured firmware version");
        }

        let mut snapshot = parsed.snapshot;
        snapshot.set_firmware_version(self.firmware_version());
        Ok(snapshot)
    }

    /// Sends a command path such as `?onoff=active` or `cleartimer`.
    ///
    /// Only the HTTP status matters; the body is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error once every recovery phase has failed.
    pub async fn send_command(&self, path: &str) -> Result<()> {
        self.execute(path).await.map(drop)
    }

    /// Runs one request through all recovery phases under the lock.
    async fn execute(&self, path: &str) -> Result<DeviceResponse> {
        let _guard = self.lock.lock().await;
        let active = self.active_ip();

        let error = match self.retry_active(&active, path).await {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };

        if self.host.is_static() {
            tracing::warn!(address = %active, error = %error, "Static address unreachable");
            return Err(Error::Unreachable {
                address: active,
                source: error,
            });
        }

        tracing::warn!(address = %active, error = %error, "Active address unreachable, probing known addresses");
        if let Some(response) = self.probe_known(&active, path).await {
            return Ok(response);
        }

        tracing::warn!(host = %self.host, "Known addresses unreachable, re-resolving");
        let resolved = self.resolve().await?;
        if resolved == active {
            tracing::debug!(address = %resolved, "Hostname still resolves to the active address");
        }

        match self.attempt(&resolved, path, self.policy.full_timeout).await {
            Ok(response) => {
                self.adopt(&resolved);
                Ok(response)
            }
            Err(source) => {
                tracing::warn!(address = %resolved, error = %source, "Resolved address unreachable");
                Err(Error::Unreachable {
                    address: resolved,
                    source,
                })
            }
        }
    }

    /// Retries the active address with a fixed backoff.
    async fn retry_active(
        &self,
        address: &str,
        path: &str,
    ) -> std::result::Result<DeviceResponse, ProtocolError> {
        let mut attempt = 1;
        loop {
            match self.attempt(address, path, self.policy.full_timeout).await {
                Ok(response) => return Ok(response),
                Err(e) if !self.policy.should_retry(attempt) => return Err(e),
                Err(e) => {
                    tracing::debug!(address, attempt, error = %e, "Attempt failed, retrying");
                    tokio::time::sleep(self.policy.backoff).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Tries each remembered address except `active`, most recent first.
    async fn probe_known(&self, active: &str, path: &str) -> Option<DeviceResponse> {
        let candidates: Vec<String> = self
            .addressing
            .read()
            .known_ips
            .as_slice()
            .iter()
            .filter(|ip| *ip != active)
            .cloned()
            .collect();

        for ip in candidates {
            match self.attempt(&ip, path, self.policy.probe_timeout).await {
                Ok(response) => {
                    self.adopt(&ip);
                    return Some(response);
                }
                Err(e) => tracing::debug!(address = %ip, error = %e, "Probe failed"),
            }
        }
        None
    }

    /// Performs one bounded request.
    async fn attempt(
        &self,
        address: &str,
        path: &str,
        timeout: Duration,
    ) -> std::result::Result<DeviceResponse, ProtocolError> {
        let request = DeviceRequest::new(address, self.host.as_str(), path, timeout);
        tracing::debug!(address, path = %request.path(), "Sending request");

        let response = tokio::time::timeout(timeout, self.transport.get(&request))
            .await
            .map_err(|_| ProtocolError::Timeout(millis(timeout)))??;

        if response.is_success() {
            Ok(response)
        } else {
            Err(ProtocolError::Status(response.status()))
        }
    }

    async fn resolve(&self) -> Result<String> {
        self.resolver
            .resolve(self.host.as_str())
            .await
            .map_err(|e| match e {
                ProtocolError::Resolution { host, message } => Error::Resolution { host, message },
                other => Error::Resolution {
                    host: self.host.as_str().to_string(),
                    message: other.to_string(),
                },
            })
    }

    /// Makes `ip` the active address and the most recent known one.
    fn adopt(&self, ip: &str) {
        let mut addressing = self.addressing.write();
        if addressing.active_ip != ip {
            tracing::info!(from = %addressing.active_ip, to = %ip, "Switched device address");
            let from = std::mem::replace(&mut addressing.active_ip, ip.to_string());
            addressing.changes.push(AddressChange {
                from,
                to: ip.to_string(),
            });
        }
        addressing.known_ips.promote(ip);
    }
}

impl<T, R> ConnectionManager<T, R> {
    /// Returns the configured host.
    #[must_use]
    pub fn host(&self) -> &HostAddress {
        &self.host
    }

    /// Returns `true` if the configured host is a literal IPv4 address.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.host.is_static()
    }

    /// Returns the retry policy.
    #[must_use]
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Returns the address currently believed to reach the board.
    #[must_use]
    pub fn active_ip(&self) -> String {
        self.addressing.read().active_ip.clone()
    }

    /// Returns the previously successful addresses, most recent first.
    #[must_use]
    pub fn known_ips(&self) -> Vec<String> {
        self.addressing.read().known_ips.as_slice().to_vec()
    }

    /// Drains the address moves recorded since the last call, oldest first.
    ///
    /// Moves are recorded under the serialization lock, so each one is
    /// returned exactly once no matter how many operations overlapped.
    pub fn take_address_changes(&self) -> Vec<AddressChange> {
        std::mem::take(&mut self.addressing.write().changes)
    }

    /// Returns the captured firmware version, or [`UNKNOWN_FIRMWARE`].
    #[must_use]
    pub fn firmware_version(&self) -> &str {
        self.firmware_version
            .get()
            .map_or(UNKNOWN_FIRMWARE, String::as_str)
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
