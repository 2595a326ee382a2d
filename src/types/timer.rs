// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weekly on/off timer windows.
//!
//! The board can switch itself on and off once per weekday. Each window is a
//! pair of `HH:MM` strings; `00:00`/`00:00` means no timer is set for that day.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Time value used for days without a timer.
pub const MIDNIGHT: &str = "00:00";

/// Format of timer times on the board.
const TIME_FORMAT: &str = "%H:%M";

/// Start and end time of one weekday's timer.
///
/// Windows read from the status page are kept verbatim; windows built with
/// [`TimerWindow::new`] are validated.
///
/// # Examples
///
/// ```
/// use tskylt_lib::types::TimerWindow;
///
/// let window = TimerWindow::new("08:00", "18:30").unwrap();
/// assert_eq!(window.start(), "08:00");
/// assert!(TimerWindow::new("8am", "18:30").is_err());
/// assert!(TimerWindow::default().is_unset());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerWindow {
    start: String,
    end: String,
}

impl TimerWindow {
    /// Creates a validated timer window.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTime` if either time is not `HH:MM`.
    pub fn new(start: &str, end: &str) -> Result<Self, ValueError> {
        Ok(Self {
            start: normalize(start)?,
            end: normalize(end)?,
        })
    }

    /// Creates a window from raw page values without validation.
    pub(crate) fn from_raw(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns the start time.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the end time.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Returns `true` if both times are midnight.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.start == MIDNIGHT && self.end == MIDNIGHT
    }
}

impl Default for TimerWindow {
    fn default() -> Self {
        Self::from_raw(MIDNIGHT, MIDNIGHT)
    }
}

fn normalize(value: &str) -> Result<String, ValueError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .map_err(|_| ValueError::InvalidTime(value.to_string()))
}

/// Timer windows for all seven weekdays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTimers([TimerWindow; 7]);

impl WeeklyTimers {
    /// Returns the window for `day`.
    #[must_use]
    pub fn get(&self, day: Weekday) -> &TimerWindow {
        &self.0[day_index(day)]
    }

    /// Replaces the window for `day`.
    pub fn set(&mut self, day: Weekday, window: TimerWindow) {
        self.0[day_index(day)] = window;
    }

    /// Resets every day to the unset window.
    pub fn clear(&mut self) {
        self.0 = Default::default();
    }

    /// Iterates over `(weekday, window)` pairs, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &TimerWindow)> {
        WEEKDAYS.iter().copied().zip(self.0.iter())
    }
}

/// Weekdays in the order the board lists them.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn day_index(day: Weekday) -> usize {
    usize::try_from(day.num_days_from_monday()).unwrap_or(0)
}

/// Returns the capitalized English name the board uses in timer commands.
#[must_use]
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Returns the lower-case prefix of the timer inputs on the status page.
#[must_use]
pub(crate) fn weekday_element_prefix(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
