//! Retry budget and backoff schedule for API requests.

use std::time::Duration;

/// Bounded exponential-backoff policy used by [`crate::Client`].
///
/// The delay after the k-th failed attempt (0-indexed) is
/// `initial_delay * 2^k`, with no jitter. Against the open data API's
/// undocumented rate limits the fixed schedule has proven sufficient;
/// adding jitter would change observable timing and is deliberately left
/// out.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt. Default 3, so up to
    /// 4 attempts total.
    pub retries: u32,
    /// Delay before the first retry. Default 1 second.
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            initial_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay after `attempt` failures (0-indexed).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.min(30));
        self.initial_delay.saturating_mul(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_doubles_from_one_second() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(1), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(4000));
    }

    #[test]
    fn large_attempt_counts_saturate_instead_of_overflowing() {
        let policy = RetryPolicy::default();
        let huge = policy.delay_for(u32::MAX);
        assert!(huge >= policy.delay_for(30));
    }
}
