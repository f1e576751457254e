/*!
 * Request pacing for translation provider calls.
 *
 * The provider quota is a per-call budget, so the limiter enforces a
 * minimum interval between grants rather than delaying at any particular
 * position in the tree walk. It is shared through `Arc` and serializes
 * grants through a mutex, so concurrent callers would share one budget.
 */

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Minimum-interval rate limiter
#[derive(Debug)]
pub struct RateLimiter {
    /// Minimum spacing between grants
    interval: Duration,
    /// Earliest instant the next grant may happen
    next_ready: Mutex<Instant>,
}

impl RateLimiter {
    /// Create a limiter with the given minimum interval between calls
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_ready: Mutex::new(Instant::now()),
        }
    }

    /// Create a limiter from a delay in milliseconds
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Wait until a call is allowed.
    ///
    /// A zero interval never sleeps. Grants are spaced from the previous
    /// grant, not from the previous call's completion.
    pub async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }

        let mut next_ready = self.next_ready.lock().await;
        let now = Instant::now();
        if now < *next_ready {
            let wake_at = *next_ready;
            *next_ready = wake_at + self.interval;
            drop(next_ready);
            sleep_until(wake_at).await;
        } else {
            *next_ready = now + self.interval;
        }
    }
}
