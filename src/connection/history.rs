// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded recency list of addresses that answered before.

/// Previously successful addresses, most recent first.
///
/// Recording an address that is already present moves it to the front
/// instead of adding it again; the oldest entry falls off once the list is
/// full.
///
/// # Examples
///
/// ```
/// use tskylt_lib::connection::KnownIps;
///
/// let mut known = KnownIps::new(2);
/// known.promote("10.0.0.5");
/// known.promote("10.0.0.9");
/// known.promote("10.0.0.5");
/// assert_eq!(known.as_slice(), ["10.0.0.5", "10.0.0.9"]);
///
/// known.promote("10.0.0.7");
/// assert_eq!(known.as_slice(), ["10.0.0.7", "10.0.0.5"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownIps {
    entries: Vec<String>,
    capacity: usize,
}

impl KnownIps {
    /// Creates an empty list holding at most `capacity` entries.
    ///
    /// A capacity of 0 is treated as 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Moves `ip` to the front, inserting it if absent.
    pub fn promote(&mut self, ip: &str) {
        if let Some(pos) = self.entries.iter().position(|e| e == ip) {
            self.entries[..=pos].rotate_right(1);
        } else {
            self.entries.insert(0, ip.to_string());
            self.entries.truncate(self.capacity);
        }
    }

    /// Returns `true` if `ip` is remembered.
    #[must_use]
    pub fn contains(&self, ip: &str) -> bool {
        self.entries.iter().any(|e| e == ip)
    }

    /// Returns the entries, most recent first.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
