// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic refresh task.

use std::sync::Weak;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::protocol::{Resolver, Transport};

use super::{Device, Inner};

/// Shortest accepted polling interval.
const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to a running poller.
///
/// Dropping the handle stops the poller. The poller also stops on its own
/// once every [`Device`] clone has been dropped.
#[derive(Debug)]
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stops the poller.
    pub fn stop(self) {
        drop(self);
    }

    /// Returns `true` if the poller has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub(super) fn spawn<T, R>(device: Weak<Inner<T, R>>, interval: Duration) -> PollerHandle
where
    T: Transport + 'static,
    R: Resolver + 'static,
{
    let period = interval.max(MIN_INTERVAL);
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let Some(inner) = device.upgrade() else {
                tracing::debug!("Device dropped, stopping poller");
                break;
            };
            let board = Device { inner };
            if board.refresh().await.is_err() {
                tracing::debug!(host = %board.host(), "Scheduled refresh failed");
            }
        }
    });

    PollerHandle { task }
}
