/*!
 * Pacing between outbound backend calls.
 *
 * This module enforces a minimum wall-clock spacing between consecutive
 * calls to a translation backend. It is a simple pacing delay owned by
 * one translator instance, not a queue; a single in-flight caller per
 * instance is assumed.
 */

use std::time::{Duration, Instant};

use tokio::time::sleep;

/// Rate limiter enforcing a minimum interval between backend calls
#[derive(Debug)]
pub struct RateLimiter {
    /// Minimum spacing between two backend calls
    min_interval: Duration,

    /// When the last backend call completed, `None` until the first call
    last_call: Option<Instant>,
}

impl RateLimiter {
    /// Create a rate limiter with the given minimum interval in milliseconds
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval: Duration::from_millis(min_interval_ms),
            last_call: None,
        }
    }

    /// Wait until the minimum interval since the last call has elapsed
    ///
    /// Returns immediately when no call has been made yet or the interval
    /// has already passed. This sleep is the only suspension point in the
    /// core translation flow.
    pub async fn pace(&self) {
        let Some(last_call) = self.last_call else {
            return;
        };

        let elapsed = last_call.elapsed();
        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }
    }

    /// Record that a backend call just completed
    ///
    /// Must be called after every backend attempt, success or failure.
    pub fn mark(&mut self) {
        self.last_call = Some(Instant::now());
    }

    /// The configured minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
