// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broadcast channel for device events.

use tokio::sync::broadcast;

use super::DeviceEvent;

/// Number of events buffered per subscriber before it starts lagging.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Broadcasts device events to any number of subscribers.
///
/// Clones share the same channel. A subscriber that falls more than the
/// channel capacity behind loses the oldest events and sees
/// `RecvError::Lagged` once. Publishing never blocks and never fails, so a
/// board keeps being polled whether anyone listens or not.
///
/// # Examples
///
/// ```
/// use tskylt_lib::event::{DeviceEvent, DeviceId, EventBus};
///
/// let bus = EventBus::new();
/// let mut rx = bus.subscribe();
///
/// bus.publish(DeviceEvent::AvailabilityChanged {
///     device_id: DeviceId::new(),
///     available: true,
/// });
///
/// assert!(rx.try_recv().unwrap().is_connection());
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DeviceEvent>,
}

impl EventBus {
    /// Creates a bus with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a bus buffering up to `capacity` events per subscriber.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns a receiver for events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DeviceEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of live receivers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event; dropped silently when nobody listens.
    pub fn publish(&self, event: DeviceEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("No event subscribers");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
