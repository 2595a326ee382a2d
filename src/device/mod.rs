// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level board abstraction.
//!
//! A [`Device`] wraps one [`ConnectionManager`] and adds what a host
//! platform needs on top: the latest snapshot, an availability flag,
//! optimistic updates after commands, events, and periodic polling.
//!
//! ```no_run
//! use std::time::Duration;
//! use tskylt_lib::Device;
//! use tskylt_lib::types::{Brightness, Flag};
//!
//! # async fn example() -> tskylt_lib::Result<()> {
//! let device = Device::builder("skylt.local").build().await?;
//!
//! let snapshot = device.refresh().await?;
//! println!("temperature: {:?}", snapshot.temperature());
//!
//! device.set_flag(Flag::Power, true).await;
//! device.set_brightness(Brightness::High).await;
//!
//! let _poller = device.spawn_poller(Duration::from_secs(60));
//! # Ok(())
//! # }
//! ```

mod builder;
mod poller;

pub use builder::DeviceBuilder;
pub use poller::PollerHandle;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Weekday;
use parking_lot::RwLock;
use tokio::sync::{Mutex, broadcast};

use crate::command::{Command, MaintenanceCommand, SettingCommand, TimerCommand, ToggleCommand};
use crate::connection::{ConnectionManager, HostAddress};
use crate::error::{Result, ValueError};
use crate::event::{DeviceEvent, DeviceId, EventBus};
use crate::protocol::{HttpTransport, Resolver, SystemResolver, Transport};
use crate::state::StateSnapshot;
use crate::types::{Brightness, Flag, LedColor, Setting, TimerWindow};

/// A T-Skylt departure board.
///
/// Cloning is cheap and clones share all state. Refreshes and commands from
/// any clone are serialized by the underlying [`ConnectionManager`].
///
/// Commands are fire-and-forget: they return whether the board accepted
/// them, report failures as [`DeviceEvent::CommandFailed`], and update the
/// cached snapshot optimistically either way. The next refresh replaces the
/// cached snapshot with what the board actually reports.
#[derive(Debug)]
pub struct Device<T = HttpTransport, R = SystemResolver> {
    inner: Arc<Inner<T, R>>,
}

#[derive(Debug)]
struct Inner<T, R> {
    id: DeviceId,
    connection: ConnectionManager<T, R>,
    snapshot: RwLock<Option<StateSnapshot>>,
    available: AtomicBool,
    events: EventBus,
    poll_interval: Duration,
    // Held across the read and the toggle in `set_flag`
    flag_lock: Mutex<()>,
}

impl<T, R> Clone for Device<T, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Device {
    /// Starts building a device for `host` using HTTP and the system
    /// resolver.
    #[must_use]
    pub fn builder(host: impl Into<String>) -> DeviceBuilder {
        DeviceBuilder::new(host)
    }
}

impl<T: Transport, R: Resolver> Device<T, R> {
    pub(crate) fn new(
        id: DeviceId,
        connection: ConnectionManager<T, R>,
        events: EventBus,
        poll_interval: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                id,
                connection,
                snapshot: RwLock::new(None),
                available: AtomicBool::new(false),
                events,
                poll_interval,
                flag_lock: Mutex::new(()),
            }),
        }
    }

    /// Fetches a fresh snapshot and caches it.
    ///
    /// On failure the device is marked unavailable and the previous snapshot
    /// is kept.
    ///
    /// # Errors
    ///
    /// Returns the terminal error once every recovery phase has failed.
    pub async fn refresh(&self) -> Result<StateSnapshot> {
        let result = self.inner.connection.refresh().await;
        self.report_address_changes();

        match result {
            Ok(snapshot) => {
                *self.inner.snapshot.write() = Some(snapshot.clone());
                self.set_available(true);
                self.inner
                    .events
                    .publish(DeviceEvent::snapshot_updated(self.inner.id, snapshot.clone()));
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(host = %self.host(), error = %e, "Refresh failed");
                self.set_available(false);
                self.inner.events.publish(DeviceEvent::RefreshFailed {
                    device_id: self.inner.id,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Sends a command and applies its optimistic change.
    ///
    /// Returns `true` if the board accepted the command.
    pub async fn send<C: Command + Sync>(&self, command: &C) -> bool {
        let path = command.path();
        let result = self.inner.connection.send_command(&path).await;
        self.report_address_changes();

        let delivered = match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(host = %self.host(), path = %path, error = %e, "Command failed");
                self.inner.events.publish(DeviceEvent::CommandFailed {
                    device_id: self.inner.id,
                    path,
                    error: e.to_string(),
                });
                false
            }
        };

        self.apply_optimistic(command);
        delivered
    }

    /// Turns a flag on or off.
    ///
    /// The board only toggles, so nothing is sent when the cached value
    /// already matches. Returns `true` if the flag is expected to be `on`.
    ///
    /// Calls are serialized against each other, so concurrent requests for
    /// the same value send at most one toggle. The cached value can still be
    /// stale if the flag was changed on the board itself since the last
    /// refresh; the toggle then inverts the real state until the next
    /// refresh shows it.
    pub async fn set_flag(&self, flag: Flag, on: bool) -> bool {
        let _guard = self.inner.flag_lock.lock().await;
        let current = self
            .inner
            .snapshot
            .read()
            .as_ref()
            .is_some_and(|s| s.flag(flag));
        if current == on {
            return true;
        }
        self.send(&ToggleCommand::new(flag)).await
    }

    /// Sets the display brightness.
    pub async fn set_brightness(&self, level: Brightness) -> bool {
        self.send(&SettingCommand::brightness(level)).await
    }

    /// Sets the LED color tone.
    pub async fn set_led_color(&self, color: LedColor) -> bool {
        self.send(&SettingCommand::led_color(color)).await
    }

    /// Sets a numeric setting.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the value is not valid for the setting;
    /// nothing is sent in that case.
    pub async fn set_number(&self, setting: Setting, value: u16) -> std::result::Result<bool, ValueError> {
        let command = SettingCommand::number(setting, value)?;
        Ok(self.send(&command).await)
    }

    /// Sets a free-text setting.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the setting is not a text setting or the
    /// text is too long; nothing is sent in that case.
    pub async fn set_text(&self, setting: Setting, value: &str) -> std::result::Result<bool, ValueError> {
        let command = SettingCommand::text(setting, value)?;
        Ok(self.send(&command).await)
    }

    /// Sets one weekday's on/off window.
    pub async fn set_timer(&self, day: Weekday, window: TimerWindow) -> bool {
        self.send(&TimerCommand::set(day, window)).await
    }

    /// Clears every weekday's window.
    pub async fn clear_timers(&self) -> bool {
        self.send(&TimerCommand::Clear).await
    }

    /// Runs a maintenance action.
    pub async fn run(&self, action: MaintenanceCommand) -> bool {
        self.send(&action).await
    }

    fn apply_optimistic<C: Command>(&self, command: &C) {
        let mut guard = self.inner.snapshot.write();
        let Some(snapshot) = guard.as_mut() else {
            return;
        };
        let Some(change) = command.optimistic_change(snapshot) else {
            return;
        };
        if snapshot.apply(&change) {
            let event = DeviceEvent::state_changed(self.inner.id, change, snapshot.clone());
            drop(guard);
            self.inner.events.publish(event);
        }
    }

    fn report_address_changes(&self) {
        for change in self.inner.connection.take_address_changes() {
            self.inner
                .events
                .publish(DeviceEvent::address_changed(self.inner.id, change.from, change.to));
        }
    }

    fn set_available(&self, available: bool) {
        if self.inner.available.swap(available, Ordering::AcqRel) != available {
            tracing::info!(host = %self.host(), available, "Availability changed");
            self.inner.events.publish(DeviceEvent::AvailabilityChanged {
                device_id: self.inner.id,
                available,
            });
        }
    }
}

impl<T: Transport + 'static, R: Resolver + 'static> Device<T, R> {
    /// Refreshes on a fixed interval until the handle is dropped.
    ///
    /// The first refresh runs immediately. A refresh that overruns the
    /// interval delays the next one instead of causing a burst. Intervals
    /// below one second are raised to one second. Failures are reported
    /// through events only.
    #[must_use = "the poller stops when the handle is dropped"]
    pub fn spawn_poller(&self, interval: Duration) -> PollerHandle {
        poller::spawn(Arc::downgrade(&self.inner), interval)
    }

    /// Starts a poller at the configured [`poll_interval`](Self::poll_interval).
    #[must_use = "the poller stops when the handle is dropped"]
    pub fn start_polling(&self) -> PollerHandle {
        self.spawn_poller(self.inner.poll_interval)
    }
}

impl<T, R> Device<T, R> {
    /// Returns the device ID used in events.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.inner.id
    }

    /// Returns the configured host.
    #[must_use]
    pub fn host(&self) -> &HostAddress {
        self.inner.connection.host()
    }

    /// Returns the connection manager.
    #[must_use]
    pub fn connection(&self) -> &ConnectionManager<T, R> {
        &self.inner.connection
    }

    /// Returns the latest snapshot, including optimistic changes.
    ///
    /// `None` until the first successful refresh.
    #[must_use]
    pub fn snapshot(&self) -> Option<StateSnapshot> {
        self.inner.snapshot.read().clone()
    }

    /// Returns the interval used by [`start_polling`](Self::start_polling).
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.inner.poll_interval
    }

    /// Returns `true` if the last refresh succeeded.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.inner.available.load(Ordering::Acquire)
    }

    /// Returns the event bus.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.inner.events
    }

    /// Subscribes to this device's events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DeviceEvent> {
        self.inner.events.subscribe()
    }

    /// Returns the address currently believed to reach the board.
    #[must_use]
    pub fn active_ip(&self) -> String {
        self.inner.connection.active_ip()
    }

    /// Returns the previously successful addresses, most recent first.
    #[must_use]
    pub fn known_ips(&self) -> Vec<String> {
        self.inner.connection.known_ips()
    }

    /// Returns `true` if the board is configured by literal IPv4 address.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.inner.connection.is_static()
    }

    /// Returns the captured firmware version, or `"unknown"`.
    #[must_use]
    pub fn firmware_version(&self) -> &str {
        self.inner.connection.firmware_version()
    }
}
