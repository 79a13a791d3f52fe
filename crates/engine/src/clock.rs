//! Time sources for the game loop.

use std::time::{Duration, Instant};

/// Monotonic time since an arbitrary, fixed origin.
pub trait Clock {
    fn now(&mut self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that advances by a fixed step on every reading.
#[derive(Debug, Clone, Copy)]
pub struct SteppedClock {
    current: Duration,
    step: Duration,
}

impl SteppedClock {
    pub fn new(step: Duration) -> Self {
        Self {
            current: Duration::ZERO,
            step,
        }
    }
}

impl Clock for SteppedClock {
    fn now(&mut self) -> Duration {
        let t = self.current;
        self.current += self.step;
        t
    }
}
