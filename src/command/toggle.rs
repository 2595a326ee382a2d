// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flag toggle commands.

use crate::command::Command;
use crate::state::{StateChange, StateSnapshot};
use crate::types::Flag;

/// Command flipping one on/off flag.
///
/// The board only offers toggles, never absolute on/off values, so setting
/// a flag to a given state means toggling it only when it differs.
///
/// # Examples
///
/// ```
/// use tskylt_lib::command::{Command, ToggleCommand};
/// use tskylt_lib::types::Flag;
///
/// assert_eq!(ToggleCommand::new(Flag::ListMode).path(), "?listmode=switch");
/// assert_eq!(ToggleCommand::new(Flag::Ferry).path(), "?type=ship");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleCommand {
    flag: Flag,
}

impl ToggleCommand {
    /// Creates a toggle for `flag`.
    #[must_use]
    pub const fn new(flag: Flag) -> Self {
        Self { flag }
    }

    /// Returns the flag being toggled.
    #[must_use]
    pub const fn flag(&self) -> Flag {
        self.flag
    }
}

impl Command for ToggleCommand {
    fn path(&self) -> String {
        self.flag.toggle_query().to_string()
    }

    fn optimistic_change(&self, current: &StateSnapshot) -> Option<StateChange> {
        Some(StateChange::flag(self.flag, !current.flag(self.flag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_flag_has_a_query() {
        for flag in Flag::ALL {
            assert!(ToggleCommand::new(flag).path().starts_with('?'));
        }
    }

    #[test]
    fn optimistic_change_inverts_current() {
        let mut snapshot = StateSnapshot::default();
        snapshot.set_flag(Flag::Power, true);

        let change = ToggleCommand::new(Flag::Power).optimistic_change(&snapshot);
        assert_eq!(change, Some(StateChange::flag(Flag::Power, false)));
    }
}
