// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsed board state.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::types::{Flag, Operator, Setting, TimerWindow, WeeklyTimers};

use super::StateChange;

/// Firmware version reported until the page has shown one.
pub const UNKNOWN_FIRMWARE: &str = "unknown";

/// Complete state of a board at one point in time.
///
/// A snapshot is produced by every successful refresh and replaces the
/// previous one as a whole. Every flag and setting has a value; only the
/// diagnostic readings ([`temperature`](Self::temperature) and
/// [`uptime_minutes`](Self::uptime_minutes)) may be absent.
///
/// # Examples
///
/// ```
/// use tskylt_lib::state::{StateChange, StateSnapshot};
/// use tskylt_lib::types::{Flag, Setting};
///
/// let mut snapshot = StateSnapshot::default();
/// assert!(!snapshot.flag(Flag::Power));
/// assert_eq!(snapshot.setting(Setting::MaxDestinations), "5");
///
/// // Apply returns true if state actually changed
/// assert!(snapshot.apply(&StateChange::flag(Flag::Power, true)));
/// assert!(!snapshot.apply(&StateChange::flag(Flag::Power, true)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    flags: [bool; Flag::ALL.len()],
    settings: Vec<String>,
    operator: Operator,
    timers: WeeklyTimers,
    update_available: bool,
    temperature: Option<i32>,
    uptime_minutes: Option<u64>,
    firmware_version: String,
}

impl StateSnapshot {
    /// Returns the value of a flag.
    #[must_use]
    pub fn flag(&self, flag: Flag) -> bool {
        self.flags[flag.index()]
    }

    /// Sets the value of a flag.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.flags[flag.index()] = value;
    }

    /// Returns all flags with their values.
    #[must_use]
    pub fn flags(&self) -> Vec<(Flag, bool)> {
        Flag::ALL.iter().map(|f| (*f, self.flag(*f))).collect()
    }

    /// Returns the value of a setting.
    #[must_use]
    pub fn setting(&self, setting: Setting) -> &str {
        self.settings
            .get(setting.index())
            .map_or(setting.default_value(), String::as_str)
    }

    /// Sets the value of a setting.
    pub fn set_setting(&mut self, setting: Setting, value: impl Into<String>) {
        if let Some(slot) = self.settings.get_mut(setting.index()) {
            *slot = value.into();
        }
    }

    /// Returns the selected operator.
    #[must_use]
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Sets the selected operator.
    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = operator;
    }

    /// Returns the timer window for a weekday.
    #[must_use]
    pub fn timer(&self, day: Weekday) -> &TimerWindow {
        self.timers.get(day)
    }

    /// Returns all timer windows.
    #[must_use]
    pub fn timers(&self) -> &WeeklyTimers {
        &self.timers
    }

    /// Sets the timer window for a weekday.
    pub fn set_timer(&mut self, day: Weekday, window: TimerWindow) {
        self.timers.set(day, window);
    }

    /// Returns `true` if the board offers a firmware update.
    #[must_use]
    pub fn update_available(&self) -> bool {
        self.update_available
    }

    /// Sets the update-available indicator.
    pub fn set_update_available(&mut self, available: bool) {
        self.update_available = available;
    }

    /// Returns the system temperature in degrees, if reported.
    #[must_use]
    pub fn temperature(&self) -> Option<i32> {
        self.temperature
    }

    /// Sets the system temperature.
    pub fn set_temperature(&mut self, temperature: Option<i32>) {
        self.temperature = temperature;
    }

    /// Returns the uptime in minutes, if reported.
    #[must_use]
    pub fn uptime_minutes(&self) -> Option<u64> {
        self.uptime_minutes
    }

    /// Sets the uptime.
    pub fn set_uptime_minutes(&mut self, minutes: Option<u64>) {
        self.uptime_minutes = minutes;
    }

    /// Returns the firmware version, or [`UNKNOWN_FIRMWARE`].
    #[must_use]
    pub fn firmware_version(&self) -> &str {
        &self.firmware_version
    }

    /// Sets the firmware version.
    pub fn set_firmware_version(&mut self, version: impl Into<String>) {
        self.firmware_version = version.into();
    }

    /// Applies a state change.
    ///
    /// Returns `true` if the snapshot was modified.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Flag { flag, value } => {
                let changed = self.flag(*flag) != *value;
                self.set_flag(*flag, *value);
                changed
            }
            StateChange::Setting { setting, value } => {
                let changed = self.setting(*setting) != value.as_str();
                self.set_setting(*setting, value.clone());
                changed
            }
            StateChange::Timer { day, window } => {
                let changed = self.timer(*day) != window;
                self.set_timer(*day, window.clone());
                changed
            }
            StateChange::ClearTimers => {
                let changed = self.timers != WeeklyTimers::default();
                self.timers.clear();
                changed
            }
            StateChange::Batch(changes) => {
                let mut any = false;
                for c in changes {
                    any |= self.apply(c);
                }
                any
            }
        }
    }
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            flags: [false; Flag::ALL.len()],
            settings: Setting::ALL
                .iter()
                .map(|s| s.default_value().to_string())
                .collect(),
            operator: Operator::default(),
            timers: WeeklyTimers::default(),
            update_available: false,
            temperature: None,
            uptime_minutes: None,
            firmware_version: UNKNOWN_FIRMWARE.to_string(),
        }
    }
}
