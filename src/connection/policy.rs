// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Retry and timeout settings for the connection manager.

use std::time::Duration;

/// Configuration for the resilient request sequence.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tskylt_lib::connection::RetryPolicy;
///
/// // Default policy: 3 attempts, 2s apart, 20s timeout, 4s probes
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.attempts, 3);
///
/// // Custom policy
/// let policy = RetryPolicy::new()
///     .with_attempts(5)
///     .with_backoff(Duration::from_millis(500))
///     .with_probe_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts against the active address before escalating (at least 1).
    pub attempts: u32,
    /// Fixed delay between two attempts against the active address.
    pub backoff: Duration,
    /// Timeout of a regular attempt.
    pub full_timeout: Duration,
    /// Timeout of a speculative attempt against a remembered address.
    pub probe_timeout: Duration,
    /// Number of previously successful addresses to remember (at least 1).
    pub history_size: usize,
}

impl RetryPolicy {
    /// Default number of attempts against the active address.
    pub const DEFAULT_ATTEMPTS: u32 = 3;
    /// Default delay between attempts.
    pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);
    /// Default timeout of a regular attempt.
    pub const DEFAULT_FULL_TIMEOUT: Duration = Duration::from_secs(20);
    /// Default timeout of a probe attempt.
    pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(4);
    /// Default address history size.
    pub const DEFAULT_HISTORY_SIZE: usize = 5;

    /// Creates a policy with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of attempts against the active address.
    ///
    /// Values below 1 are raised to 1.
    #[must_use]
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    /// Sets the delay between attempts.
    #[must_use]
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Sets the timeout of a regular attempt.
    #[must_use]
    pub fn with_full_timeout(mut self, timeout: Duration) -> Self {
        self.full_timeout = timeout;
        self
    }

    /// Sets the timeout of a probe attempt.
    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Sets how many addresses are remembered.
    ///
    /// Values below 1 are raised to 1.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size.max(1);
        self
    }

    /// Returns true if another attempt against the active address is allowed
    /// after `attempt` attempts have failed.
    #[must_use]
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: Self::DEFAULT_ATTEMPTS,
            backoff: Self::DEFAULT_BACKOFF,
            full_timeout: Self::DEFAULT_FULL_TIMEOUT,
            probe_timeout: Self::DEFAULT_PROBE_TIMEOUT,
            history_size: Self::DEFAULT_HISTORY_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.attempts, 3);
        assert_eq!(policy.backoff, Duration::from_secs(2));
        assert_eq!(policy.full_timeout, Duration::from_secs(20));
        assert_eq!(policy.probe_timeout, Duration::from_secs(4));
        assert_eq!(policy.history_size, 5);
    }

    #[test]
    fn zero_values_are_raised() {
        let policy = RetryPolicy::new().with_attempts(0).with_history_size(0);

        assert_eq!(policy.attempts, 1);
        assert_eq!(policy.history_size, 1);
    }

    #[test]
    fn should_retry() {
        let policy = RetryPolicy::new().with_attempts(3);

        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(!policy.should_retry(3));
    }
}
