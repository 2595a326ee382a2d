// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Valued settings of the board.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A setting that carries a value rather than an on/off state.
///
/// Depending on the firmware revision a setting may be rendered as a
/// `<select>` or as a plain `<input>`; the parser accepts both. Every
/// setting has a default used when the page carries neither.
///
/// # Examples
///
/// ```
/// use tskylt_lib::types::Setting;
///
/// assert_eq!(Setting::MaxDestinations.element_id(), "maxdest");
/// assert_eq!(Setting::MaxDestinations.default_value(), "5");
/// assert!(Setting::MinutesSuffix.is_text());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    /// Brightness level (`0`-`2`).
    Brightness,
    /// Scroll speed.
    ScrollSpeed,
    /// LED color tone (`0`-`2`).
    LedColor,
    /// Display width.
    DisplayWidth,
    /// Maximum number of destinations shown.
    MaxDestinations,
    /// Minutes before departure at which an arrival is hidden.
    ArrivalOffset,
    /// Wi-Fi transmit power.
    TransmitPower,
    /// Number of characters of the line id that are shown.
    LineLength,
    /// Selected station.
    Station,
    /// Text shown when there are no more departures.
    NoMoreDepartures,
    /// Suffix shown after minute counts.
    MinutesSuffix,
    /// Account user or e-mail.
    User,
}

impl Setting {
    /// Every setting, in page order.
    pub const ALL: [Self; 12] = [
        Self::Brightness,
        Self::ScrollSpeed,
        Self::LedColor,
        Self::DisplayWidth,
        Self::MaxDestinations,
        Self::ArrivalOffset,
        Self::TransmitPower,
        Self::LineLength,
        Self::Station,
        Self::NoMoreDepartures,
        Self::MinutesSuffix,
        Self::User,
    ];

    /// Returns the `id` of the element carrying this setting.
    ///
    /// This is also the query key the board accepts to change it.
    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::ScrollSpeed => "scroll",
            Self::LedColor => "color",
            Self::DisplayWidth => "width",
            Self::MaxDestinations => "maxdest",
            Self::ArrivalOffset => "offset",
            Self::TransmitPower => "power",
            Self::LineLength => "line_length",
            Self::Station => "newstation",
            Self::NoMoreDepartures => "no_more_departures",
            Self::MinutesSuffix => "mins",
            Self::User => "user",
        }
    }

    /// Returns the value used when the page does not carry this setting.
    #[must_use]
    pub const fn default_value(&self) -> &'static str {
        match self {
            Self::MaxDestinations => "5",
            Self::TransmitPower => "20",
            Self::LineLength => "3",
            Self::NoMoreDepartures | Self::MinutesSuffix | Self::User => "",
            Self::Brightness
            | Self::ScrollSpeed
            | Self::LedColor
            | Self::DisplayWidth
            | Self::ArrivalOffset
            | Self::Station => "0",
        }
    }

    /// Returns `true` for free-text settings.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(
            self,
            Self::NoMoreDepartures | Self::MinutesSuffix | Self::User
        )
    }

    /// Returns `true` if some firmware revisions render this setting as a
    /// `<select>`.
    #[must_use]
    pub const fn may_be_select(&self) -> bool {
        matches!(
            self,
            Self::Brightness
                | Self::ScrollSpeed
                | Self::LedColor
                | Self::DisplayWidth
                | Self::ArrivalOffset
                | Self::Station
        )
    }

    /// Returns a stable snake-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::ScrollSpeed => "scroll_speed",
            Self::LedColor => "led_color",
            Self::DisplayWidth => "display_width",
            Self::MaxDestinations => "max_destinations",
            Self::ArrivalOffset => "arrival_offset",
            Self::TransmitPower => "transmit_power",
            Self::LineLength => "line_length",
            Self::Station => "station",
            Self::NoMoreDepartures => "no_more_departures",
            Self::MinutesSuffix => "minutes_suffix",
            Self::User => "user",
        }
    }

    /// Returns the position of this setting in [`Setting::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, setting) in Setting::ALL.iter().enumerate() {
            assert_eq!(setting.index(), i);
        }
    }

    #[test]
    fn text_settings_default_to_empty() {
        for setting in Setting::ALL.iter().filter(|s| s.is_text()) {
            assert_eq!(setting.default_value(), "");
        }
    }

    #[test]
    fn numeric_defaults() {
        assert_eq!(Setting::Brightness.default_value(), "0");
        assert_eq!(Setting::TransmitPower.default_value(), "20");
        assert_eq!(Setting::LineLength.default_value(), "3");
    }
}
