// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device builder.

use std::time::Duration;

use crate::config::{DEFAULT_POLL_INTERVAL, DeviceConfig};
use crate::connection::{ConnectionManager, HostAddress, RetryPolicy};
use crate::device::Device;
use crate::error::{Error, Result};
use crate::event::{DeviceId, EventBus};
use crate::protocol::{HttpTransport, Resolver, SystemResolver, Transport};

/// Builder for [`Device`].
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use tskylt_lib::Device;
/// use tskylt_lib::connection::RetryPolicy;
///
/// # async fn example() -> tskylt_lib::Result<()> {
/// // Defaults: port 80, 3 attempts 2s apart
/// let device = Device::builder("skylt.local").build().await?;
///
/// // Custom port and retry policy
/// let device = Device::builder("192.168.1.40")
///     .with_port(8080)
///     .with_policy(RetryPolicy::new().with_attempts(5))
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeviceBuilder<T = HttpTransport, R = SystemResolver> {
    host: String,
    policy: RetryPolicy,
    transport: T,
    resolver: R,
    id: Option<DeviceId>,
    events: Option<EventBus>,
    poll_interval: Duration,
}

impl DeviceBuilder {
    /// Creates a builder for `host` with default settings.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            policy: RetryPolicy::default(),
            transport: HttpTransport::new(),
            resolver: SystemResolver::new(),
            id: None,
            events: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Creates a builder from a configuration document.
    #[must_use]
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self::new(config.host.clone())
            .with_port(config.port)
            .with_policy(config.retry.clone())
            .with_poll_interval(config.poll_interval)
    }
}

impl<R> DeviceBuilder<HttpTransport, R> {
    /// Sets the HTTP port (default 80).
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.transport = self.transport.with_port(port);
        self
    }
}

impl<T, R> DeviceBuilder<T, R> {
    /// Sets the retry policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the interval used by [`Device::start_polling`] (default 60s).
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Overrides the device ID, which is otherwise derived from the host.
    #[must_use]
    pub fn with_id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Publishes events on a shared bus instead of a private one.
    #[must_use]
    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Replaces the transport.
    #[must_use]
    pub fn with_transport<T2: Transport>(self, transport: T2) -> DeviceBuilder<T2, R> {
        DeviceBuilder {
            host: self.host,
            policy: self.policy,
            transport,
            resolver: self.resolver,
            id: self.id,
            events: self.events,
            poll_interval: self.poll_interval,
        }
    }

    /// Replaces the name resolver.
    #[must_use]
    pub fn with_resolver<R2: Resolver>(self, resolver: R2) -> DeviceBuilder<T, R2> {
        DeviceBuilder {
            host: self.host,
            policy: self.policy,
            transport: self.transport,
            resolver,
            id: self.id,
            events: self.events,
            poll_interval: self.poll_interval,
        }
    }
}

impl<T: Transport, R: Resolver> DeviceBuilder<T, R> {
    /// Builds the device and resolves its initial address.
    ///
    /// A failed initial resolution is logged and the device starts dialing
    /// the hostname; the recovery phases resolve it again later. No request
    /// is sent to the board.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the host is malformed.
    pub async fn build(self) -> Result<Device<T, R>> {
        let host = HostAddress::parse(&self.host).map_err(Error::Protocol)?;
        let id = self.id.unwrap_or_else(|| DeviceId::for_host(host.as_str()));
        let connection = ConnectionManager::new(host, self.policy, self.transport, self.resolver);

        if let Err(e) = connection.resolve_initial_address().await {
            tracing::warn!(host = %connection.host(), error = %e, "Initial resolution failed");
        }
        // Leaving the raw hostname is not a move of the board
        connection.take_address_changes();

        Ok(Device::new(
            id,
            connection,
            self.events.unwrap_or_default(),
            self.poll_interval,
        ))
    }
}
