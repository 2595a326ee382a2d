// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Board command definitions.
//!
//! The board is configured through unauthenticated GET requests: a query
//! string against `/` for most settings, or a bare path for maintenance
//! actions. This module builds those paths from typed values.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Example path |
//! |-------------|---------|---------|
//! | [`ToggleCommand`] | Flip an on/off flag | `?onoff=active` |
//! | [`SettingCommand`] | Change a valued setting | `?brightness=2` |
//! | [`TimerCommand`] | Set or clear weekday timers | `?set_timer=Monday&start=...` |
//! | [`MaintenanceCommand`] | Firmware, reboot and diagnostics | `stop` |
//!
//! # Optimistic updates
//!
//! Commands are fire-and-forget: the board answers with an HTML page that
//! does not confirm the change. Each command therefore describes the
//! [`StateChange`] it is expected to cause, which callers apply to their
//! cached snapshot until the next refresh reports the real state.
//!
//! # Examples
//!
//! ```
//! use tskylt_lib::command::{Command, SettingCommand, ToggleCommand};
//! use tskylt_lib::state::StateSnapshot;
//! use tskylt_lib::types::{Brightness, Flag};
//!
//! let toggle = ToggleCommand::new(Flag::Power);
//! assert_eq!(toggle.path(), "?onoff=active");
//!
//! let brightness = SettingCommand::brightness(Brightness::High);
//! assert_eq!(brightness.path(), "?brightness=2");
//!
//! // Power is off in a default snapshot, so toggling turns it on
//! let change = toggle.optimistic_change(&StateSnapshot::default());
//! assert!(change.is_some());
//! ```

mod maintenance;
mod setting;
mod timer;
mod toggle;

pub use maintenance::MaintenanceCommand;
pub use setting::SettingCommand;
pub use timer::TimerCommand;
pub use toggle::ToggleCommand;

use crate::state::{StateChange, StateSnapshot};

/// A command that can be sent to a board.
pub trait Command {
    /// Returns the path and query sent to the board, relative to `/`.
    ///
    /// Values are already percent-encoded.
    fn path(&self) -> String;

    /// Returns the change this command is expected to make to `current`.
    ///
    /// Returns `None` for commands with no visible effect on the snapshot.
    fn optimistic_change(&self, current: &StateSnapshot) -> Option<StateChange>;
}

impl<C: Command + ?Sized> Command for &C {
    fn path(&self) -> String {
        (**self).path()
    }

    fn optimistic_change(&self, current: &StateSnapshot) -> Option<StateChange> {
        (**self).optimistic_change(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Flag;

    #[test]
    fn reference_forwards() {
        fn path_of(command: impl Command) -> String {
            command.path()
        }

        let cmd = ToggleCommand::new(Flag::Bus);
        assert_eq!(path_of(&cmd), "?type=bus");
    }

    #[test]
    fn applying_optimistic_change_flips_flag() {
        let mut snapshot = StateSnapshot::default();
        let cmd = ToggleCommand::new(Flag::SleepWhenEmpty);

        let change = cmd.optimistic_change(&snapshot).unwrap();
        assert!(snapshot.apply(&change));
        assert!(snapshot.flag(Flag::SleepWhenEmpty));
    }
}
