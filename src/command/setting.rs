// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Valued setting commands.

use crate::command::Command;
use crate::error::ValueError;
use crate::state::{StateChange, StateSnapshot};
use crate::types::{Brightness, LedColor, Setting};

/// Longest free-text value the board stores.
const MAX_TEXT_LEN: usize = 64;

/// Command assigning a value to a setting.
///
/// The value is sent as `?<element id>=<percent-encoded value>`.
///
/// # Examples
///
/// ```
/// use tskylt_lib::command::{Command, SettingCommand};
/// use tskylt_lib::types::{LedColor, Setting};
///
/// let color = SettingCommand::led_color(LedColor::White);
/// assert_eq!(color.path(), "?color=2");
///
/// let text = SettingCommand::text(Setting::NoMoreDepartures, "Inga fler avgångar").unwrap();
/// assert_eq!(text.path(), "?no_more_departures=Inga%20fler%20avg%C3%A5ngar");
///
/// let offset = SettingCommand::number(Setting::ArrivalOffset, 4).unwrap();
/// assert_eq!(offset.path(), "?offset=4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingCommand {
    setting: Setting,
    value: String,
}

impl SettingCommand {
    /// Sets the brightness level.
    #[must_use]
    pub fn brightness(level: Brightness) -> Self {
        Self {
            setting: Setting::Brightness,
            value: level.as_value().to_string(),
        }
    }

    /// Sets the LED color tone.
    #[must_use]
    pub fn led_color(color: LedColor) -> Self {
        Self {
            setting: Setting::LedColor,
            value: color.as_value().to_string(),
        }
    }

    /// Sets a numeric setting.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidOption` for free-text settings, and
    /// `ValueError::OutOfRange` for brightness or LED color above 2.
    pub fn number(setting: Setting, value: u16) -> Result<Self, ValueError> {
        if setting.is_text() {
            return Err(ValueError::InvalidOption {
                setting: setting.as_str(),
                value: value.to_string(),
            });
        }

        let max = u16::from(Brightness::MAX_LEVEL);
        if matches!(setting, Setting::Brightness | Setting::LedColor) && value > max {
            return Err(ValueError::OutOfRange {
                min: 0,
                max,
                actual: value,
            });
        }

        Ok(Self {
            setting,
            value: value.to_string(),
        })
    }

    /// Sets a free-text setting.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidOption` if `setting` is not a text
    /// setting or the text is longer than the board stores.
    pub fn text(setting: Setting, value: &str) -> Result<Self, ValueError> {
        if !setting.is_text() || value.chars().count() > MAX_TEXT_LEN {
            return Err(ValueError::InvalidOption {
                setting: setting.as_str(),
                value: value.to_string(),
            });
        }

        Ok(Self {
            setting,
            value: value.to_string(),
        })
    }

    /// Returns the setting being changed.
    #[must_use]
    pub fn setting(&self) -> Setting {
        self.setting
    }

    /// Returns the unencoded value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Command for SettingCommand {
    fn path(&self) -> String {
        format!(
            "?{}={}",
            self.setting.element_id(),
            urlencoding::encode(&self.value)
        )
    }

    fn optimistic_change(&self, _current: &StateSnapshot) -> Option<StateChange> {
        Some(StateChange::setting(self.setting, self.value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_path() {
        assert_eq!(
            SettingCommand::brightness(Brightness::Medium).path(),
            "?brightness=1"
        );
    }

    #[test]
    fn number_rejects_text_setting() {
        assert!(SettingCommand::number(Setting::User, 3).is_err());
    }

    #[test]
    fn number_validates_levels() {
        assert!(SettingCommand::number(Setting::Brightness, 2).is_ok());
        assert_eq!(
            SettingCommand::number(Setting::Brightness, 3),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 2,
                actual: 3
            })
        );
        assert!(SettingCommand::number(Setting::LedColor, 300).is_err());
    }

    #[test]
    fn text_rejects_numeric_setting() {
        assert!(SettingCommand::text(Setting::MaxDestinations, "5").is_err());
    }

    #[test]
    fn text_is_percent_encoded() {
        let cmd = SettingCommand::text(Setting::User, "me+board@example.com").unwrap();
        assert_eq!(cmd.path(), "?user=me%2Bboard%40example.com");
        assert_eq!(cmd.value(), "me+board@example.com");
    }

    #[test]
    fn text_length_is_limited() {
        let long = "x".repeat(MAX_TEXT_LEN + 1);
        assert!(SettingCommand::text(Setting::MinutesSuffix, &long).is_err());
    }

    #[test]
    fn optimistic_change_sets_value() {
        let cmd = SettingCommand::number(Setting::MaxDestinations, 8).unwrap();
        assert_eq!(
            cmd.optimistic_change(&StateSnapshot::default()),
            Some(StateChange::setting(Setting::MaxDestinations, "8"))
        );
    }
}
