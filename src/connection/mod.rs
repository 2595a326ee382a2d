// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resilient access to a board whose address may change.
//!
//! Boards sit on home Wi-Fi with DHCP leases and mDNS names that go stale.
//! [`ConnectionManager`] keeps the address currently in use plus a short
//! history of addresses that answered before, and escalates through those
//! before giving up:
//!
//! 1. retry the active address ([`RetryPolicy::attempts`], fixed backoff);
//! 2. probe remembered addresses ([`RetryPolicy::probe_timeout`]);
//! 3. re-resolve the configured hostname;
//! 4. try the resolved address once.
//!
//! Steps 2 to 4 are skipped for a literal IPv4 host.

mod history;
mod host;
mod manager;
mod policy;

pub use history::KnownIps;
pub use host::HostAddress;
pub use manager::{AddressChange, ConnectionManager};
pub use policy::RetryPolicy;
