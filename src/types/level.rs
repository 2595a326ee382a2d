// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Three-step selections: brightness and LED color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Display brightness.
///
/// # Examples
///
/// ```
/// use tskylt_lib::types::Brightness;
///
/// assert_eq!(Brightness::Medium.as_value(), "1");
/// assert_eq!("2".parse::<Brightness>().unwrap(), Brightness::High);
/// assert_eq!(Brightness::from_level(0).unwrap(), Brightness::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Brightness {
    /// Level 0.
    #[default]
    Low,
    /// Level 1.
    Medium,
    /// Level 2.
    High,
}

impl Brightness {
    /// Highest brightness level.
    pub const MAX_LEVEL: u8 = 2;

    /// Creates a brightness from its numeric level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `level` is above 2.
    pub fn from_level(level: u8) -> Result<Self, ValueError> {
        match level {
            0 => Ok(Self::Low),
            1 => Ok(Self::Medium),
            2 => Ok(Self::High),
            _ => Err(ValueError::OutOfRange {
                min: 0,
                max: u16::from(Self::MAX_LEVEL),
                actual: u16::from(level),
            }),
        }
    }

    /// Returns the value sent to and reported by the board.
    #[must_use]
    pub const fn as_value(&self) -> &'static str {
        match self {
            Self::Low => "0",
            Self::Medium => "1",
            Self::High => "2",
        }
    }

    /// Returns a human readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Brightness {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Low),
            "1" => Ok(Self::Medium),
            "2" => Ok(Self::High),
            other => Err(ValueError::InvalidOption {
                setting: "brightness",
                value: other.to_string(),
            }),
        }
    }
}

/// LED color tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LedColor {
    /// Value 0.
    #[default]
    Orange,
    /// Value 1.
    Yellow,
    /// Value 2.
    White,
}

impl LedColor {
    /// Returns the value sent to and reported by the board.
    #[must_use]
    pub const fn as_value(&self) -> &'static str {
        match self {
            Self::Orange => "0",
            Self::Yellow => "1",
            Self::White => "2",
        }
    }

    /// Returns a human readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::White => "White",
        }
    }
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LedColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Orange),
            "1" => Ok(Self::Yellow),
            "2" => Ok(Self::White),
            other => Err(ValueError::InvalidOption {
                setting: "color",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_out_of_range() {
        let err = Brightness::from_level(3).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                min: 0,
                max: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn brightness_parse_rejects_labels() {
        assert!("High".parse::<Brightness>().is_err());
    }

    #[test]
    fn led_color_values() {
        assert_eq!(LedColor::White.as_value(), "2");
        assert_eq!("1".parse::<LedColor>().unwrap(), LedColor::Yellow);
        assert!("7".parse::<LedColor>().is_err());
    }
}
