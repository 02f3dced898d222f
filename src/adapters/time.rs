//! Monotonic clock adapter.
//!
//! Wraps `embassy_time::Instant::now()`, which on the host is backed by the
//! embassy-time std driver. The controller itself never reads the clock;
//! the runner samples it and passes instants into the work queue.

use embassy_time::{Duration, Instant};

pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        Instant::now()
    }

    /// Time since the clock was created.
    pub fn uptime(&self) -> Duration {
        self.now().saturating_duration_since(self.start)
    }

    /// Milliseconds since the clock was created.
    pub fn uptime_ms(&self) -> u64 {
        self.uptime().as_millis()
    }

    /// Block the calling thread until `deadline`. Returns immediately if it
    /// has already passed.
    pub fn sleep_until(&self, deadline: Instant) {
        let remaining = deadline.saturating_duration_since(self.now());
        if remaining > Duration::from_ticks(0) {
            std::thread::sleep(std::time::Duration::from_micros(remaining.as_micros()));
        }
    }
}
