//! Configuration for circuit breakers.

use std::sync::Arc;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::count::CountBreaker;
use crate::error::ConfigError;
use crate::hook::HookRegistry;
use crate::time::TimeBreaker;

/// Builder for creating count-based breakers with custom configurations.
#[derive(Debug, Clone)]
pub struct CountBreakerBuilder {
    closed_failures_threshold: u32,
    half_open_threshold: u32,
    hooks: HookRegistry,
}

impl Default for CountBreakerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CountBreakerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            closed_failures_threshold: 5,
            half_open_threshold: 3,
            hooks: HookRegistry::new(),
        }
    }

    /// Sets the number of consecutive failures required to trip the circuit.
    pub fn consecutive_failures(mut self, count: u32) -> Self {
        self.closed_failures_threshold = count;
        self
    }

    /// Sets the number of rejected attempts before a probe is let through.
    pub fn half_open_attempts(mut self, count: u32) -> Self {
        self.half_open_threshold = count;
        self
    }

    /// Sets a hook registry for the circuit breaker.
    pub fn hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    /// Builds a breaker, failing if any threshold is zero.
    pub fn build(self) -> Result<CountBreaker, ConfigError> {
        CountBreaker::from_parts(
            self.closed_failures_threshold,
            self.half_open_threshold,
            self.hooks,
        )
    }
}

/// Builder for creating time-based breakers with custom configurations.
#[derive(Debug, Clone)]
pub struct TimeBreakerBuilder {
    clock: Arc<dyn Clock>,
    open_timeout: Duration,
    half_open_probes_threshold: u32,
    closed_failures_threshold: u32,
    hooks: HookRegistry,
}

impl Default for TimeBreakerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeBreakerBuilder {
    /// Creates a new builder with default settings and the system clock.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            open_timeout: Duration::from_secs(1),
            half_open_probes_threshold: 1,
            closed_failures_threshold: 5,
            hooks: HookRegistry::new(),
        }
    }

    /// Sets the clock the breaker reads time from.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets how long the circuit stays open before probing.
    pub fn open_timeout(mut self, timeout: Duration) -> Self {
        self.open_timeout = timeout;
        self
    }

    /// Sets the number of failed probes that re-open the circuit.
    pub fn half_open_probes(mut self, count: u32) -> Self {
        self.half_open_probes_threshold = count;
        self
    }

    /// Sets the number of consecutive failures required to trip the circuit.
    pub fn consecutive_failures(mut self, count: u32) -> Self {
        self.closed_failures_threshold = count;
        self
    }

    /// Sets a hook registry for the circuit breaker.
    pub fn hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    /// Builds a breaker, failing on a zero threshold or an out-of-range timeout.
    pub fn build(self) -> Result<TimeBreaker, ConfigError> {
        TimeBreaker::from_parts(
            self.clock,
            self.open_timeout,
            self.half_open_probes_threshold,
            self.closed_failures_threshold,
            self.hooks,
        )
    }
}
