// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device events.
//!
//! Refreshes, commands and address changes are reported on an [`EventBus`]
//! backed by a tokio broadcast channel, so a host platform can mark boards
//! unavailable or update its entities without polling the device.
//!
//! # Examples
//!
//! ```
//! use tskylt_lib::event::{DeviceId, DeviceEvent, EventBus};
//!
//! let bus = EventBus::new();
//!
//! // Subscribe to events
//! let mut rx = bus.subscribe();
//!
//! // Publish an event
//! let device_id = DeviceId::new();
//! bus.publish(DeviceEvent::RefreshFailed {
//!     device_id,
//!     error: "device unreachable".to_string(),
//! });
//! ```

mod device_event;
mod device_id;
mod event_bus;

pub use device_event::DeviceEvent;
pub use device_id::DeviceId;
pub use event_bus::EventBus;
