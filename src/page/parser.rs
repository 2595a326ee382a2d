// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for the board's HTML status page.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::state::StateSnapshot;
use crate::types::{Flag, MIDNIGHT, Operator, Setting, TimerWindow, WEEKDAYS, weekday_element_prefix};

use super::extract::{Extractor, Page, extract_with};

static BUTTON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("button").expect("valid button selector"));
static DROPDOWN_BUTTON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("button.dropbtn").expect("valid dropdown selector"));
static FIRMWARE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\.\s*\d+(?:\.\d+)+").expect("valid firmware regex"));
static LEADING_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^a-zA-Z0-9]+").expect("valid decoration regex"));
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digits regex"));

/// Label of the temperature row in the diagnostics table.
const TEMPERATURE_LABEL: &str = "System temperature";
/// Label of the uptime row in the diagnostics table.
const UPTIME_LABEL: &str = "Uptime";

/// Result of parsing one status page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// Everything but the firmware version, which is left at its default.
    pub snapshot: StateSnapshot,
    /// Firmware version found on this page, if any.
    pub firmware_version: Option<String>,
}

/// Parses a status page.
///
/// Never fails: a missing or malformed element leaves its field at the
/// default (or `None` for the diagnostic readings).
///
/// The firmware version is returned separately because the page does not
/// always repeat it identically; the caller decides whether to adopt it.
///
/// # Examples
///
/// ```
/// use tskylt_lib::page::parse_status_page;
/// use tskylt_lib::types::{Flag, Setting};
///
/// let html = r#"<input id="onoff" type="checkbox" checked>
///               <select id="brightness"><option value="1" selected>Medium</option></select>"#;
/// let parsed = parse_status_page(html);
///
/// assert!(parsed.snapshot.flag(Flag::Power));
/// assert_eq!(parsed.snapshot.setting(Setting::Brightness), "1");
/// assert_eq!(parsed.firmware_version, None);
/// ```
#[must_use]
pub fn parse_status_page(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);
    let page = Page::new(&document);
    let mut snapshot = StateSnapshot::default();

    for flag in Flag::ALL {
        snapshot.set_flag(flag, page.is_checked(flag.element_id()));
    }

    for setting in Setting::ALL {
        let value = extract_with(
            &page,
            setting.element_id(),
            Extractor::chain_for(setting),
            setting.default_value(),
        );
        snapshot.set_setting(setting, value);
    }

    for day in WEEKDAYS {
        let prefix = weekday_element_prefix(day);
        let start = extract_with(
            &page,
            &format!("{prefix}StartTime"),
            Extractor::INPUT_ONLY,
            MIDNIGHT,
        );
        let end = extract_with(
            &page,
            &format!("{prefix}EndTime"),
            Extractor::INPUT_ONLY,
            MIDNIGHT,
        );
        snapshot.set_timer(day, TimerWindow::from_raw(start, end));
    }

    if let Some(operator) = parse_operator(&page) {
        snapshot.set_operator(operator);
    }
    snapshot.set_update_available(update_available(&page));
    snapshot.set_temperature(labeled_number(&page, TEMPERATURE_LABEL));
    snapshot.set_uptime_minutes(labeled_number(&page, UPTIME_LABEL));

    ParsedPage {
        snapshot,
        firmware_version: firmware_version(&page),
    }
}

/// Reads the operator from the dropdown button label.
fn parse_operator(page: &Page<'_>) -> Option<Operator> {
    let button = page.html().select(&DROPDOWN_BUTTON).next()?;
    let raw: String = button.text().collect();
    let cleaned = LEADING_DECORATION.replace(raw.trim(), "");
    Some(Operator::from_display(cleaned.trim()))
}

/// An update is offered when an `update=true` button exists and is enabled.
fn update_available(page: &Page<'_>) -> bool {
    page.html()
        .select(&BUTTON)
        .find(|b| {
            b.value()
                .attr("onclick")
                .is_some_and(|onclick| onclick.contains("update=true"))
        })
        .is_some_and(|b| b.value().attr("disabled").is_none())
}

/// Finds a `<b>`/`<em>` label containing `label` and reads the first run of
/// digits from the next `<td>` in document order.
fn labeled_number<T: std::str::FromStr>(page: &Page<'_>, label: &str) -> Option<T> {
    let mut elements = page
        .html()
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap);

    elements.find(|el| {
        matches!(el.value().name(), "b" | "em") && el.text().collect::<String>().contains(label)
    })?;

    let cell = elements.find(|el| el.value().name() == "td")?;
    let text: String = cell.text().collect();
    DIGITS.find(&text)?.as_str().parse().ok()
}

/// Finds the first `v.<major>.<minor>...` version in the page text.
fn firmware_version(page: &Page<'_>) -> Option<String> {
    page.html()
        .root_element()
        .text()
        .find_map(|text| FIRMWARE_VERSION.find(text))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>T-Skylt</title></head>
<body>
  <div class="dropdown"><button class="dropbtn">&#9660; SL</button></div>
  <p>Firmware v. 2.14.3</p>
  <input type="checkbox" id="onoff" checked>
  <input type="checkbox" id="abc">
  <input type="checkbox" id="LISTCOLOR" checked>
  <input type="checkbox" id="BUS" checked>
  <input type="checkbox" id="SHIP">
  <select id="brightness">
    <option value="0">Low</option>
    <option value="1">Medium</option>
    <option value="2" selected>High</option>
  </select>
  <select id="scroll"><option value="1" selected>1</option></select>
  <input id="maxdest" value="" placeholder="8">
  <input id="offset" value="3">
  <input id="no_more_departures" value="Slut för idag">
  <input id="mins" value="" placeholder="min">
  <input id="mondayStartTime" value="06:30">
  <input id="mondayEndTime" value="23:00">
  <button onclick="location.href='/update?update=true'">Update</button>
  <table>
    <tr><td><b>System temperature</b></td><td>47 &deg;C</td></tr>
    <tr><td><b>Uptime</b></td><td>1234 min</td></tr>
  </table>
</body></html>"#;

    #[test]
    fn parses_flags() {
        let s = parse_status_page(FULL_PAGE).snapshot;
        assert!(s.flag(Flag::Power));
        assert!(!s.flag(Flag::ListMode));
        assert!(s.flag(Flag::ColorHighlight));
        assert!(s.flag(Flag::Bus));
        assert!(!s.flag(Flag::Ferry));
        // absent from the page
        assert!(!s.flag(Flag::Tram));
    }

    #[test]
    fn parses_settings() {
        let s = parse_status_page(FULL_PAGE).snapshot;
        assert_eq!(s.setting(Setting::Brightness), "2");
        assert_eq!(s.setting(Setting::ScrollSpeed), "1");
        assert_eq!(s.setting(Setting::MaxDestinations), "8");
        assert_eq!(s.setting(Setting::ArrivalOffset), "3");
        assert_eq!(s.setting(Setting::NoMoreDepartures), "Slut för idag");
        assert_eq!(s.setting(Setting::MinutesSuffix), "min");
        assert_eq!(s.setting(Setting::TransmitPower), "20");
        assert_eq!(s.setting(Setting::User), "");
    }

    #[test]
    fn parses_timers_with_defaults() {
        let s = parse_status_page(FULL_PAGE).snapshot;
        assert_eq!(s.timer(Weekday::Mon).start(), "06:30");
        assert_eq!(s.timer(Weekday::Mon).end(), "23:00");
        assert!(s.timer(Weekday::Sun).is_unset());
    }

    #[test]
    fn parses_operator_without_decoration() {
        let s = parse_status_page(FULL_PAGE).snapshot;
        assert_eq!(s.operator().display(), "SL");
        assert_eq!(s.operator().code(), "sl");
    }

    #[test]
    fn parses_diagnostics() {
        let s = parse_status_page(FULL_PAGE).snapshot;
        assert_eq!(s.temperature(), Some(47));
        assert_eq!(s.uptime_minutes(), Some(1234));
    }

    #[test]
    fn parses_firmware_version() {
        let parsed = parse_status_page(FULL_PAGE);
        assert_eq!(parsed.firmware_version.as_deref(), Some("v. 2.14.3"));
    }

    #[test]
    fn enabled_update_button_means_update_available() {
        assert!(parse_status_page(FULL_PAGE).snapshot.update_available());
    }

    #[test]
    fn disabled_update_button_means_no_update() {
        let html = r#"<button onclick="location.href='/update?update=true'" disabled="">Update</button>"#;
        assert!(!parse_status_page(html).snapshot.update_available());
    }

    #[test]
    fn unrelated_button_is_not_an_update() {
        let html = r#"<button onclick="location.href='/stop'">Reboot</button>"#;
        assert!(!parse_status_page(html).snapshot.update_available());
    }

    #[test]
    fn empty_page_yields_defaults() {
        let parsed = parse_status_page("");
        assert_eq!(parsed.snapshot, StateSnapshot::default());
        assert_eq!(parsed.firmware_version, None);
    }

    #[test]
    fn label_without_digits_is_none() {
        let html = "<table><tr><td><b>System temperature</b></td><td>n/a</td></tr></table>";
        let s = parse_status_page(html).snapshot;
        assert_eq!(s.temperature(), None);
    }

    #[test]
    fn label_without_cell_is_none() {
        let html = "<p><em>Uptime</em></p>";
        assert_eq!(parse_status_page(html).snapshot.uptime_minutes(), None);
    }

    #[test]
    fn em_label_is_accepted() {
        let html = "<table><tr><td><em>Uptime:</em></td><td>about 90 minutes</td></tr></table>";
        assert_eq!(parse_status_page(html).snapshot.uptime_minutes(), Some(90));
    }

    #[test]
    fn brightness_falls_back_to_input_then_default() {
        let with_input = r#"<input id="brightness" value="" placeholder="1">"#;
        assert_eq!(
            parse_status_page(with_input).snapshot.setting(Setting::Brightness),
            "1"
        );
        assert_eq!(
            parse_status_page("<p>nothing</p>").snapshot.setting(Setting::Brightness),
            "0"
        );
    }

    #[test]
    fn unknown_operator_uses_default_code() {
        let html = r#"<button class="dropbtn">» Nowhere Lines</button>"#;
        let s = parse_status_page(html).snapshot;
        assert_eq!(s.operator().display(), "Nowhere Lines");
        assert_eq!(s.operator().code(), Operator::DEFAULT_CODE);
    }
}
