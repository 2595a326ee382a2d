// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Maintenance and diagnostic actions.

use crate::command::Command;
use crate::state::{StateChange, StateSnapshot};

/// One-shot action with no setting attached.
///
/// # Examples
///
/// ```
/// use tskylt_lib::command::{Command, MaintenanceCommand};
///
/// assert_eq!(MaintenanceCommand::UpdateFirmware.path(), "update?update=true");
/// assert_eq!(MaintenanceCommand::Reboot.path(), "stop");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaintenanceCommand {
    /// Install the offered firmware update.
    UpdateFirmware,
    /// Revert to the previous firmware.
    DowngradeFirmware,
    /// Reboot the board.
    Reboot,
    /// Run the board's ping test.
    Ping,
    /// Show the board's DNS information.
    Dns,
    /// Rotate the display.
    Rotate,
}

impl MaintenanceCommand {
    /// Every maintenance action.
    pub const ALL: [Self; 6] = [
        Self::UpdateFirmware,
        Self::DowngradeFirmware,
        Self::Reboot,
        Self::Ping,
        Self::Dns,
        Self::Rotate,
    ];

    /// Returns the path requested for this action.
    #[must_use]
    pub const fn as_path(&self) -> &'static str {
        match self {
            Self::UpdateFirmware => "update?update=true",
            Self::DowngradeFirmware => "ver?ver=1",
            Self::Reboot => "stop",
            Self::Ping => "ping",
            Self::Dns => "dns",
            Self::Rotate => "rotate",
        }
    }
}

impl Command for MaintenanceCommand {
    fn path(&self) -> String {
        self.as_path().to_string()
    }

    fn optimistic_change(&self, _current: &StateSnapshot) -> Option<StateChange> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_bare() {
        for cmd in MaintenanceCommand::ALL {
            assert!(!cmd.path().starts_with('/'));
            assert!(cmd.optimistic_change(&StateSnapshot::default()).is_none());
        }
    }
}
