//! Clock abstraction used by the time-based breaker.

use parking_lot::Mutex;
use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Source of the current instant, so timing can be faked in tests.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current instant. Must not have side effects.
    fn now(&self) -> Instant;
}

/// Monotonic clock backed by `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Share it as `Arc<ManualClock>` between a test and the breaker under test,
/// then drive time forward with [`tick`](ManualClock::tick) or
/// [`advance`](ManualClock::advance).
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
    step: Duration,
}

impl ManualClock {
    /// Creates a clock frozen at the current instant that moves by `step` on every tick.
    pub fn new(step: Duration) -> Self {
        Self::starting_at(Instant::now(), step)
    }

    /// Creates a clock frozen at `start`.
    pub fn starting_at(start: Instant, step: Duration) -> Self {
        Self {
            now: Mutex::new(start),
            step,
        }
    }

    /// The fixed increment applied by [`tick`](ManualClock::tick).
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Moves the clock forward by its fixed step.
    pub fn tick(&self) {
        self.advance(self.step);
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}
