// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status page parsing.
//!
//! The board has no machine-readable API; its state is scraped from the
//! HTML page served at `/`. Parsing is synchronous and infallible so it can
//! run between awaits without holding the document.
//!
//! # Examples
//!
//! ```
//! use tskylt_lib::page::parse_status_page;
//!
//! let parsed = parse_status_page("<p>Firmware v. 1.2</p>");
//! assert_eq!(parsed.firmware_version.as_deref(), Some("v. 1.2"));
//! ```

mod extract;
mod parser;

pub use extract::Extractor;
pub use parser::{ParsedPage, parse_status_page};
