// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device event types.

use serde::{Deserialize, Serialize};

use crate::state::{StateChange, StateSnapshot};

use super::DeviceId;

/// Events emitted by a [`Device`](crate::Device).
///
/// All events carry the device ID so a single subscriber can watch many
/// boards.
///
/// # Examples
///
/// ```
/// use tskylt_lib::event::{DeviceEvent, DeviceId};
///
/// let device_id = DeviceId::new();
///
/// let moved = DeviceEvent::address_changed(device_id, "10.0.0.5", "10.0.0.9");
/// assert!(moved.is_connection());
///
/// let offline = DeviceEvent::AvailabilityChanged {
///     device_id,
///     available: false,
/// };
/// assert!(offline.is_connection());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceEvent {
    /// A refresh produced a new snapshot.
    SnapshotUpdated {
        /// The ID of the device.
        device_id: DeviceId,
        /// The new snapshot.
        snapshot: Box<StateSnapshot>,
    },

    /// A refresh failed after every recovery phase.
    RefreshFailed {
        /// The ID of the device.
        device_id: DeviceId,
        /// Description of the terminal error.
        error: String,
    },

    /// A command could not be delivered.
    CommandFailed {
        /// The ID of the device.
        device_id: DeviceId,
        /// The command path that was sent.
        path: String,
        /// Description of the terminal error.
        error: String,
    },

    /// The cached snapshot was changed locally by a command.
    StateChanged {
        /// The ID of the device.
        device_id: DeviceId,
        /// The change that was applied.
        change: StateChange,
        /// The cached snapshot after the change.
        new_state: Box<StateSnapshot>,
    },

    /// The board started answering on a different address.
    AddressChanged {
        /// The ID of the device.
        device_id: DeviceId,
        /// The previous active address.
        from: String,
        /// The new active address.
        to: String,
    },

    /// The board became reachable or unreachable.
    AvailabilityChanged {
        /// The ID of the device.
        device_id: DeviceId,
        /// Whether the last refresh succeeded.
        available: bool,
    },
}

impl DeviceEvent {
    /// Returns the device ID associated with this event.
    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        match self {
            Self::SnapshotUpdated { device_id, .. }
            | Self::RefreshFailed { device_id, .. }
            | Self::CommandFailed { device_id, .. }
            | Self::StateChanged { device_id, .. }
            | Self::AddressChanged { device_id, .. }
            | Self::AvailabilityChanged { device_id, .. } => *device_id,
        }
    }

    /// Returns `true` for failure events.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::RefreshFailed { .. } | Self::CommandFailed { .. }
        )
    }

    /// Returns `true` for address and availability events.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            Self::AddressChanged { .. } | Self::AvailabilityChanged { .. }
        )
    }

    /// Returns `true` for events carrying a new or changed snapshot.
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        matches!(
            self,
            Self::SnapshotUpdated { .. } | Self::StateChanged { .. }
        )
    }

    /// Creates a snapshot updated event.
    #[must_use]
    pub fn snapshot_updated(device_id: DeviceId, snapshot: StateSnapshot) -> Self {
        Self::SnapshotUpdated {
            device_id,
            snapshot: Box::new(snapshot),
        }
    }

    /// Creates a state changed event.
    #[must_use]
    pub fn state_changed(device_id: DeviceId, change: StateChange, new_state: StateSnapshot) -> Self {
        Self::StateChanged {
            device_id,
            change,
            new_state: Box::new(new_state),
        }
    }

    /// Creates an address changed event.
    #[must_use]
    pub fn address_changed(
        device_id: DeviceId,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::AddressChanged {
            device_id,
            from: from.into(),
            to: to.into(),
        }
    }
}
