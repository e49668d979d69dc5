//! Minimum spacing between outbound generation requests.

use parking_lot::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Default spacing between two requests.
pub const MIN_INTERVAL: Duration = Duration::from_millis(2000);

/// Process-wide request gate shared by every backend.
///
/// Each caller reserves the slot `max(now, last + interval)` under the
/// lock and then sleeps until it, so concurrent callers queue up one
/// interval apart.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl Throttle {
    /// A gate with the given spacing.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// The configured spacing.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until this caller may send.
    pub async fn throttle(&self) {
        let now = Instant::now();
        let slot = self.reserve(now);
        if slot > now {
            tracing::debug!(
                wait_ms = (slot - now).as_millis() as u64,
                "throttling generation request"
            );
            tokio::time::sleep_until(slot).await;
        }
    }

    fn reserve(&self, now: Instant) -> Instant {
        let mut last = self.last.lock();
        let slot = match *last {
            Some(prev) => (prev + self.interval).max(now),
            None => now,
        };
        *last = Some(slot);
        slot
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(MIN_INTERVAL)
    }
}
