//! Elapsed-time sources for the time axis.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Time elapsed since the owning buffer was created.
pub trait Clock: Send {
    fn elapsed(&self) -> Duration;

    /// Whole seconds, truncated.
    fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}

/// Monotonic wall time, started on construction.
#[derive(Clone, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock advanced by hand. Clones share the same reading, so a test can keep
/// one handle and give the other to a buffer.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    elapsed: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        *self.elapsed.lock() += by;
    }

    pub fn set(&self, elapsed: Duration) {
        *self.elapsed.lock() = elapsed;
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        *self.elapsed.lock()
    }
}
