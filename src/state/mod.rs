// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Board state types.
//!
//! [`StateSnapshot`] holds everything parsed from one status page, and
//! [`StateChange`] represents a local edit applied on top of it.
//!
//! # Examples
//!
//! ```
//! use tskylt_lib::state::{StateChange, StateSnapshot};
//! use tskylt_lib::types::Setting;
//!
//! let mut snapshot = StateSnapshot::default();
//! snapshot.apply(&StateChange::setting(Setting::Brightness, "1"));
//!
//! assert_eq!(snapshot.setting(Setting::Brightness), "1");
//! ```

mod snapshot;
mod state_change;

pub use snapshot::{StateSnapshot, UNKNOWN_FIRMWARE};
pub use state_change::StateChange;
