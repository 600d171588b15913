//! Wall-clock measurement helpers for the fsync run
//!
//! The driver times two phases per iteration (the 1 MiB write and the
//! fsync that follows it) and enforces a wall-clock cap on the whole run.
//! Samples are printed as they are taken, never retained.

use std::time::{Duration, Instant};

/// Run `f` and return its result together with the elapsed wall-clock time.
pub fn measure<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Tracks elapsed time since the start of the measurement loop.
#[derive(Debug)]
pub struct RunClock {
    start: Instant,
}

impl RunClock {
    /// Start the clock.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Wall-clock time since the clock was started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whether the run has exceeded `cap`.
    pub fn expired(&self, cap: Duration) -> bool {
        self.elapsed() > cap
    }
}

impl Default for RunClock {
    fn default() -> Self {
        Self::new()
    }
}
