// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element lookups on a parsed status page.
//!
//! Firmware revisions render the same setting differently, so each field is
//! read through an ordered list of [`Extractor`]s; the first one that yields
//! a value wins and the field default covers the rest.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::types::Setting;

static INPUT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input").expect("valid input selector"));
static SELECT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("select").expect("valid select selector"));
static OPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("option").expect("valid option selector"));

/// One way of reading a valued field from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// The `value` of the `<option selected>` of `<select id=...>`.
    SelectedOption,
    /// The `value` of `<input id=...>`, or its `placeholder` when `value`
    /// is empty.
    InputValue,
}

impl Extractor {
    /// Chain used for settings that may be rendered as a dropdown.
    pub const SELECT_OR_INPUT: &'static [Self] = &[Self::SelectedOption, Self::InputValue];

    /// Chain used for settings only ever rendered as an input.
    pub const INPUT_ONLY: &'static [Self] = &[Self::InputValue];

    /// Returns the extraction chain for a setting.
    #[must_use]
    pub fn chain_for(setting: Setting) -> &'static [Self] {
        if setting.may_be_select() {
            Self::SELECT_OR_INPUT
        } else {
            Self::INPUT_ONLY
        }
    }

    fn extract(self, page: &Page<'_>, id: &str) -> Option<String> {
        match self {
            Self::SelectedOption => page.selected_option(id),
            Self::InputValue => page.input_value(id),
        }
    }
}

/// Runs `chain` against the element `id` and falls back to `default`.
pub(crate) fn extract_with(page: &Page<'_>, id: &str, chain: &[Extractor], default: &str) -> String {
    chain
        .iter()
        .find_map(|extractor| extractor.extract(page, id))
        .unwrap_or_else(|| default.to_string())
}

/// Read-only view over a parsed document.
pub(crate) struct Page<'a> {
    html: &'a Html,
}

impl<'a> Page<'a> {
    pub(crate) fn new(html: &'a Html) -> Self {
        Self { html }
    }

    pub(crate) fn html(&self) -> &'a Html {
        self.html
    }

    /// Finds `<input id=...>`.
    pub(crate) fn input(&self, id: &str) -> Option<ElementRef<'a>> {
        self.html
            .select(&INPUT)
            .find(|el| el.value().attr("id") == Some(id))
    }

    /// Finds `<select id=...>`.
    fn select(&self, id: &str) -> Option<ElementRef<'a>> {
        self.html
            .select(&SELECT)
            .find(|el| el.value().attr("id") == Some(id))
    }

    /// Returns `true` if `<input id=...>` exists and carries `checked`.
    pub(crate) fn is_checked(&self, id: &str) -> bool {
        self.input(id)
            .is_some_and(|el| el.value().attr("checked").is_some())
    }

    fn input_value(&self, id: &str) -> Option<String> {
        let input = self.input(id)?;
        ["value", "placeholder"]
            .iter()
            .filter_map(|attr| input.value().attr(attr))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn selected_option(&self, id: &str) -> Option<String> {
        let select = self.select(id)?;
        select
            .select(&OPTION)
            .find(|opt| opt.value().attr("selected").is_some())
            .and_then(|opt| opt.value().attr("value"))
            .map(|v| v.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn input_value_prefers_value_over_placeholder() {
        let html = page(r#"<input id="maxdest" value="7" placeholder="5">"#);
        let p = Page::new(&html);
        assert_eq!(p.input_value("maxdest"), Some("7".to_string()));
    }

    #[test]
    fn input_value_uses_placeholder_when_value_blank() {
        let html = page(r#"<input id="maxdest" value="  " placeholder="6">"#);
        let p = Page::new(&html);
        assert_eq!(p.input_value("maxdest"), Some("6".to_string()));
    }

    #[test]
    fn input_value_none_when_both_blank() {
        let html = page(r#"<input id="maxdest">"#);
        let p = Page::new(&html);
        assert_eq!(p.input_value("maxdest"), None);
    }

    #[test]
    fn chain_falls_through_to_input() {
        let html = page(r#"<input id="brightness" value="2">"#);
        let p = Page::new(&html);
        let value = extract_with(&p, "brightness", Extractor::SELECT_OR_INPUT, "0");
        assert_eq!(value, "2");
    }

    #[test]
    fn chain_prefers_select() {
        let html = page(
            r#"<select id="brightness"><option value="0">Low</option><option value="1" selected>Mid</option></select>
               <input id="brightness" value="2">"#,
        );
        let p = Page::new(&html);
        let value = extract_with(&p, "brightness", Extractor::SELECT_OR_INPUT, "0");
        assert_eq!(value, "1");
    }

    #[test]
    fn select_without_selected_option_falls_through() {
        let html = page(r#"<select id="scroll"><option value="3">3</option></select>"#);
        let p = Page::new(&html);
        let value = extract_with(&p, "scroll", Extractor::SELECT_OR_INPUT, "0");
        assert_eq!(value, "0");
    }

    #[test]
    fn checked_requires_attribute() {
        let html = page(r#"<input id="a" type="checkbox" checked><input id="b" type="checkbox">"#);
        let p = Page::new(&html);
        assert!(p.is_checked("a"));
        assert!(!p.is_checked("b"));
        assert!(!p.is_checked("missing"));
    }
}
