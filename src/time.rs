//! Monotonic time injection
//!
//! Enemy AI cooldowns are absolute millisecond deadlines. The core treats
//! time as an opaque increasing integer source with no wall-clock meaning,
//! so tests can step it by hand instead of sleeping.

use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch. Must never decrease.
    fn now_ms(&self) -> u64;
}

/// Real clock measured from construction. The obvious choice for a live
/// driver loop.
#[derive(Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Hand-stepped clock for deterministic tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
