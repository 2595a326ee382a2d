// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! A state change is a local, optimistic edit of a cached
//! [`StateSnapshot`](super::StateSnapshot). Commands produce them so the
//! cached state reflects a write immediately; the next refresh replaces the
//! whole snapshot with what the board actually reports.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::types::{Flag, Setting, TimerWindow};

/// Represents a change in board state.
///
/// # Examples
///
/// ```
/// use tskylt_lib::state::StateChange;
/// use tskylt_lib::types::{Flag, Setting};
///
/// let on = StateChange::flag(Flag::Power, true);
/// let text = StateChange::setting(Setting::MinutesSuffix, "min");
/// let both = StateChange::Batch(vec![on, text]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateChange {
    /// A flag changed.
    Flag {
        /// The flag.
        flag: Flag,
        /// Its new value.
        value: bool,
    },

    /// A setting changed.
    Setting {
        /// The setting.
        setting: Setting,
        /// Its new value.
        value: String,
    },

    /// A weekday's timer window changed.
    Timer {
        /// The weekday.
        day: Weekday,
        /// The new window.
        window: TimerWindow,
    },

    /// All timer windows were cleared.
    ClearTimers,

    /// Multiple changes at once.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates a flag change.
    #[must_use]
    pub fn flag(flag: Flag, value: bool) -> Self {
        Self::Flag { flag, value }
    }

    /// Creates a setting change.
    #[must_use]
    pub fn setting(setting: Setting, value: impl Into<String>) -> Self {
        Self::Setting {
            setting,
            value: value.into(),
        }
    }

    /// Creates a timer change.
    #[must_use]
    pub fn timer(day: Weekday, window: TimerWindow) -> Self {
        Self::Timer { day, window }
    }
}
