//! Time sources for debouncing.
//!
//! The debouncer never sleeps; it compares deadlines against a [`Clock`].
//! Tests drive a [`MockClock`] by hand instead of waiting in real time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Abstraction over the current time.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Real clock using [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for testing.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the component under test.
///
/// ```
/// use std::time::Duration;
/// use roomdesk_list::{Clock, MockClock};
///
/// let clock = MockClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    origin: Instant,
    elapsed_ms: Arc<AtomicU64>,
}

impl MockClock {
    /// Create a clock frozen at its origin.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.elapsed_ms
            .fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }

    /// Set the time to `at` past the origin.
    pub fn set(&self, at: Duration) {
        self.elapsed_ms
            .store(at.as_millis() as u64, Ordering::SeqCst);
    }

    /// Time elapsed since the origin.
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::SeqCst))
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_clock_clones_share_time() {
        let clock = MockClock::new();
        let handle = clock.clone();
        let start = clock.now();

        handle.advance(Duration::from_millis(100));
        assert_eq!(clock.now() - start, Duration::from_millis(100));

        handle.set(Duration::from_millis(40));
        assert_eq!(clock.elapsed(), Duration::from_millis(40));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
