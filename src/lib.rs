// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `TSkylt` Lib - A Rust library to poll and control T-Skylt departure boards.
//!
//! T-Skylt boards have no API. Their whole state is an HTML page served at
//! `/`, and settings are changed with unauthenticated GET requests such as
//! `/?brightness=2`. This library scrapes that page into a typed
//! [`StateSnapshot`](state::StateSnapshot) and builds the command paths,
//! while keeping a board reachable across DHCP lease changes and stale DNS.
//!
//! # Supported Features
//!
//! - **State**: every flag, setting and weekday timer on the status page,
//!   plus temperature, uptime, operator and firmware version
//! - **Commands**: flag toggles, settings, timers, firmware and maintenance
//!   actions, each with the optimistic change it implies
//! - **Resilience**: retries, remembered addresses and re-resolution, with
//!   at most one request in flight per board
//! - **Events**: snapshot, failure, address and availability events over a
//!   broadcast channel
//!
//! # Quick Start
//!
//! ```no_run
//! use tskylt_lib::Device;
//! use tskylt_lib::types::{Brightness, Flag};
//!
//! #[tokio::main]
//! async fn main() -> tskylt_lib::Result<()> {
//!     let device = Device::builder("skylt.local").build().await?;
//!
//!     let snapshot = device.refresh().await?;
//!     println!("firmware {}", snapshot.firmware_version());
//!
//!     // Commands report delivery but never fail the caller
//!     if !device.set_flag(Flag::Power, true).await {
//!         eprintln!("board did not answer");
//!     }
//!     device.set_brightness(Brightness::Medium).await;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Polling with events
//!
//! ```no_run
//! use std::time::Duration;
//! use tskylt_lib::Device;
//! use tskylt_lib::event::DeviceEvent;
//!
//! #[tokio::main]
//! async fn main() -> tskylt_lib::Result<()> {
//!     let device = Device::builder("192.168.1.40").build().await?;
//!     let mut events = device.subscribe();
//!     let _poller = device.spawn_poller(Duration::from_secs(60));
//!
//!     while let Ok(event) = events.recv().await {
//!         if let DeviceEvent::AvailabilityChanged { available, .. } = event {
//!             println!("board available: {available}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod config;
pub mod connection;
mod device;
pub mod error;
pub mod event;
pub mod page;
pub mod protocol;
pub mod state;
pub mod types;

pub use command::{Command, MaintenanceCommand, SettingCommand, TimerCommand, ToggleCommand};
pub use config::DeviceConfig;
pub use connection::{AddressChange, ConnectionManager, HostAddress, KnownIps, RetryPolicy};
pub use device::{Device, DeviceBuilder, PollerHandle};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use page::{ParsedPage, parse_status_page};
pub use protocol::{HttpTransport, SystemResolver};
pub use state::{StateChange, StateSnapshot};
pub use types::{Brightness, Flag, LedColor, Operator, Setting, TimerWindow};
