// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Board identifier carried by every event.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for host-derived board IDs.
const BOARD_NAMESPACE: Uuid = Uuid::from_u128(0x5c1e_7a3b_0d4f_4e21_9b6a_72c8_e0f1_d3a5);

/// Identifier tagging the events of one board.
///
/// By default a [`Device`](crate::Device) derives its ID from the configured
/// host, so the same board keeps the same ID across restarts even though
/// its IP address may change underneath.
///
/// # Examples
///
/// ```
/// use tskylt_lib::event::DeviceId;
///
/// let a = DeviceId::for_host("skylt.local");
/// assert_eq!(a, DeviceId::for_host("SKYLT.local"));
/// assert_ne!(a, DeviceId::for_host("10.0.0.5"));
///
/// let json = serde_json::to_string(&a).unwrap();
/// assert_eq!(json, format!("\"{a}\""));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(Uuid);

impl DeviceId {
    /// Creates a random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derives a stable identifier from a host name or address.
    ///
    /// Host names are case-insensitive, so the host is lowercased first.
    #[must_use]
    pub fn for_host(host: &str) -> Self {
        let host = host.trim().to_ascii_lowercase();
        Self(Uuid::new_v5(&BOARD_NAMESPACE, host.as_bytes()))
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceId({})", &self.0.simple().to_string()[..8])
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for DeviceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for DeviceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_differ() {
        assert_ne!(DeviceId::new(), DeviceId::new());
    }

    #[test]
    fn host_ids_are_stable() {
        assert_eq!(DeviceId::for_host("skylt.local"), DeviceId::for_host(" Skylt.Local "));
        assert_ne!(DeviceId::for_host("skylt.local"), DeviceId::for_host("skylt2.local"));
    }

    #[test]
    fn parses_from_display() {
        let id = DeviceId::for_host("192.168.1.40");
        let back: DeviceId = id.to_string().parse().unwrap();
        assert_eq!(back, id);
        assert!("not-a-uuid".parse::<DeviceId>().is_err());
    }

    #[test]
    fn deserializes_from_plain_string() {
        let id: DeviceId =
            serde_json::from_str("\"a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8\"").unwrap();
        assert_eq!(id.to_string(), "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8");
    }

    #[test]
    fn debug_is_short() {
        let id: DeviceId = "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8".parse().unwrap();
        assert_eq!(format!("{id:?}"), "DeviceId(a1a2a3a4)");
    }
}
