// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On/off settings of the board.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A boolean setting rendered as a checkbox on the status page.
///
/// The board has no "set" command for these; each one is flipped by a
/// dedicated toggle query (see [`Flag::toggle_query`]).
///
/// # Examples
///
/// ```
/// use tskylt_lib::types::Flag;
///
/// assert_eq!(Flag::Power.element_id(), "onoff");
/// assert_eq!(Flag::Power.toggle_query(), "?onoff=active");
/// assert_eq!(Flag::Ferry.toggle_query(), "?type=ship");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// Display power.
    Power,
    /// List layout instead of the single-departure view.
    ListMode,
    /// Departures from several stops.
    MultipleStops,
    /// Station name shown above the departures.
    ShowStationName,
    /// Clock time instead of a countdown.
    ClockTime,
    /// Line color highlighting.
    ColorHighlight,
    /// Small font.
    MiniFont,
    /// Blank the display when there are no departures.
    SleepWhenEmpty,
    /// Show subway departures.
    Subway,
    /// Show bus departures.
    Bus,
    /// Show train departures.
    Train,
    /// Show tram departures.
    Tram,
    /// Show ferry departures.
    Ferry,
}

impl Flag {
    /// Every flag, in page order.
    pub const ALL: [Self; 13] = [
        Self::Power,
        Self::ListMode,
        Self::MultipleStops,
        Self::ShowStationName,
        Self::ClockTime,
        Self::ColorHighlight,
        Self::MiniFont,
        Self::SleepWhenEmpty,
        Self::Subway,
        Self::Bus,
        Self::Train,
        Self::Tram,
        Self::Ferry,
    ];

    /// Returns the `id` of the checkbox carrying this flag.
    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::Power => "onoff",
            Self::ListMode => "abc",
            Self::MultipleStops => "multiple",
            Self::ShowStationName => "show_my_station",
            Self::ClockTime => "clocktime",
            Self::ColorHighlight => "LISTCOLOR",
            Self::MiniFont => "FONTMINI",
            Self::SleepWhenEmpty => "sleep",
            Self::Subway => "METRO",
            Self::Bus => "BUS",
            Self::Train => "TRAIN",
            Self::Tram => "TRAM",
            Self::Ferry => "SHIP",
        }
    }

    /// Returns the query that flips this flag on the board.
    #[must_use]
    pub const fn toggle_query(&self) -> &'static str {
        match self {
            Self::Power => "?onoff=active",
            Self::ListMode => "?listmode=switch",
            Self::MultipleStops => "?multiple=1",
            Self::ShowStationName => "?show_station=1",
            Self::ClockTime => "?clocktime=switch",
            Self::ColorHighlight => "?listcolor=switch",
            Self::MiniFont => "?fontmini=switch",
            Self::SleepWhenEmpty => "?sleep=1",
            Self::Subway => "?type=metro",
            Self::Bus => "?type=bus",
            Self::Train => "?type=train",
            Self::Tram => "?type=tram",
            Self::Ferry => "?type=ship",
        }
    }

    /// Returns a stable snake-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::ListMode => "list_mode",
            Self::MultipleStops => "multiple_stops",
            Self::ShowStationName => "show_station_name",
            Self::ClockTime => "clock_time",
            Self::ColorHighlight => "color_highlight",
            Self::MiniFont => "mini_font",
            Self::SleepWhenEmpty => "sleep_when_empty",
            Self::Subway => "subway",
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Tram => "tram",
            Self::Ferry => "ferry",
        }
    }

    /// Returns the position of this flag in [`Flag::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
