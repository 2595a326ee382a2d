// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for T-Skylt board settings.
//!
//! These types describe what the board exposes on its status page and what
//! the command layer can change.

mod flag;
mod level;
mod operator;
mod setting;
mod timer;

pub use flag::Flag;
pub use level::{Brightness, LedColor};
pub use operator::Operator;
pub use setting::Setting;
pub use timer::{MIDNIGHT, TimerWindow, WEEKDAYS, WeeklyTimers, weekday_name};
pub(crate) use timer::weekday_element_prefix;
