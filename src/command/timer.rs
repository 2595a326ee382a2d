// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weekday timer commands.

use chrono::Weekday;

use crate::command::Command;
use crate::state::{StateChange, StateSnapshot};
use crate::types::{TimerWindow, weekday_name};

/// Command changing the on/off timers.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use tskylt_lib::command::{Command, TimerCommand};
/// use tskylt_lib::types::TimerWindow;
///
/// let window = TimerWindow::new("08:00", "18:00").unwrap();
/// let cmd = TimerCommand::set(Weekday::Mon, window);
/// assert_eq!(cmd.path(), "?set_timer=Monday&start=08%3A00to%3D18%3A00");
///
/// assert_eq!(TimerCommand::Clear.path(), "cleartimer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerCommand {
    /// Set one weekday's window.
    Set {
        /// The weekday.
        day: Weekday,
        /// The window to apply.
        window: TimerWindow,
    },
    /// Clear every weekday's window.
    Clear,
}

impl TimerCommand {
    /// Creates a command setting `day`'s window.
    #[must_use]
    pub fn set(day: Weekday, window: TimerWindow) -> Self {
        Self::Set { day, window }
    }
}

impl Command for TimerCommand {
    fn path(&self) -> String {
        match self {
            Self::Set { day, window } => {
                let range = format!("{}to={}", window.start(), window.end());
                format!(
                    "?set_timer={}&start={}",
                    weekday_name(*day),
                    urlencoding::encode(&range)
                )
            }
            Self::Clear => "cleartimer".to_string(),
        }
    }

    fn optimistic_change(&self, _current: &StateSnapshot) -> Option<StateChange> {
        match self {
            Self::Set { day, window } => Some(StateChange::timer(*day, window.clone())),
            Self::Clear => Some(StateChange::ClearTimers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_path_uses_capitalized_day() {
        let window = TimerWindow::new("06:30", "23:15").unwrap();
        let cmd = TimerCommand::set(Weekday::Sun, window);
        assert_eq!(cmd.path(), "?set_timer=Sunday&start=06%3A30to%3D23%3A15");
    }

    #[test]
    fn clear_resets_all_windows() {
        let mut snapshot = StateSnapshot::default();
        snapshot.set_timer(Weekday::Tue, TimerWindow::new("07:00", "09:00").unwrap());

        let change = TimerCommand::Clear.optimistic_change(&snapshot).unwrap();
        assert!(snapshot.apply(&change));
        assert!(snapshot.timer(Weekday::Tue).is_unset());
    }
}
