//! Breaker whose transitions are driven purely by call counts.

use crate::breaker::{announce_outcome, announce_transition, outcome_of, Breaker};
use crate::config::CountBreakerBuilder;
use crate::error::{require_positive, BreakerError, BreakerResult, ConfigError};
use crate::hook::HookRegistry;
use crate::invariant::check;
use crate::state::State;

const NAME: &str = "count";

/// A circuit breaker that opens after consecutive failures and probes again
/// after a fixed number of rejected attempts.
///
/// No time source is involved: while open, every call is rejected and counted,
/// and once `half_open_threshold` attempts have been rejected the next call is
/// let through as a probe.
///
/// ```rust
/// use circuit_guard::{Breaker, CountBreaker, Outcome, State};
///
/// let mut breaker = CountBreaker::new(2, 1).unwrap();
/// let fail = || Err::<(), _>("down");
///
/// assert_eq!(breaker.call(fail), Outcome::Failed);
/// assert_eq!(breaker.call(fail), Outcome::Failed);
/// assert_eq!(breaker.state(), State::Open);
/// assert_eq!(breaker.call(|| Ok::<(), &str>(())), Outcome::Rejected);
/// assert_eq!(breaker.state(), State::HalfOpen);
/// assert_eq!(breaker.call(|| Ok::<(), &str>(())), Outcome::Succeeded);
/// assert_eq!(breaker.state(), State::Closed);
/// ```
#[derive(Debug)]
pub struct CountBreaker {
    state: State,
    closed_failures: u32,
    closed_failures_threshold: u32,
    half_open_attempts: u32,
    half_open_threshold: u32,
    hooks: HookRegistry,
}

impl CountBreaker {
    /// Creates a closed breaker.
    ///
    /// Fails if either threshold is zero.
    pub fn new(closed_failures_threshold: u32, half_open_threshold: u32) -> Result<Self, ConfigError> {
        Self::from_parts(
            closed_failures_threshold,
            half_open_threshold,
            HookRegistry::new(),
        )
    }

    /// Creates a new builder for customizing a count-based breaker.
    pub fn builder() -> CountBreakerBuilder {
        CountBreakerBuilder::new()
    }

    pub(crate) fn from_parts(
        closed_failures_threshold: u32,
        half_open_threshold: u32,
        hooks: HookRegistry,
    ) -> Result<Self, ConfigError> {
        let closed_failures_threshold =
            require_positive("closed_failures_threshold", closed_failures_threshold)?;
        let half_open_threshold = require_positive("half_open_threshold", half_open_threshold)?;

        Ok(Self {
            state: State::Closed,
            closed_failures: 0,
            closed_failures_threshold,
            half_open_attempts: 0,
            half_open_threshold,
            hooks,
        })
    }

    /// Consecutive failures seen while closed.
    pub fn closed_failures(&self) -> u32 {
        self.closed_failures
    }

    /// Rejected attempts counted since the breaker last opened.
    pub fn half_open_attempts(&self) -> u32 {
        self.half_open_attempts
    }

    /// Consecutive failures that open the breaker.
    pub fn closed_failures_threshold(&self) -> u32 {
        self.closed_failures_threshold
    }

    /// Rejected attempts needed before a probe is allowed.
    pub fn half_open_threshold(&self) -> u32 {
        self.half_open_threshold
    }

    fn check_invariants(&self) {
        match self.state {
            State::Closed => {
                check(
                    self.closed_failures < self.closed_failures_threshold,
                    NAME,
                    "closed: closed_failures < closed_failures_threshold",
                );
                check(
                    self.half_open_attempts == 0,
                    NAME,
                    "closed: half_open_attempts == 0",
                );
            }
            State::Open | State::HalfOpen => {
                check(
                    self.closed_failures == self.closed_failures_threshold,
                    NAME,
                    "open/half-open: closed_failures == closed_failures_threshold",
                );
                check(
                    self.half_open_attempts < self.half_open_threshold,
                    NAME,
                    "open/half-open: half_open_attempts < half_open_threshold",
                );
            }
        }
    }

    fn transition(&mut self, to: State) {
        let from = self.state;
        self.state = to;
        announce_transition(NAME, from, to, &self.hooks);
    }
}

impl Breaker for CountBreaker {
    fn state(&self) -> State {
        self.state
    }

    fn call_with<T, E, F>(&mut self, f: F) -> BreakerResult<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.check_invariants();

        let result = match self.state {
            State::Closed => {
                let result = f();
                if result.is_err() {
                    self.closed_failures += 1;
                    if self.closed_failures == self.closed_failures_threshold {
                        self.transition(State::Open);
                    }
                } else {
                    self.closed_failures = 0;
                }
                result.map_err(BreakerError::Operation)
            }
            State::Open => {
                // The attempt that reaches the threshold is still rejected;
                // only the next call probes.
                self.half_open_attempts += 1;
                if self.half_open_attempts == self.half_open_threshold {
                    self.half_open_attempts = 0;
                    self.transition(State::HalfOpen);
                }
                Err(BreakerError::Open)
            }
            State::HalfOpen => {
                let result = f();
                if result.is_err() {
                    self.half_open_attempts = 0;
                    self.transition(State::Open);
                } else {
                    self.closed_failures = 0;
                    self.transition(State::Closed);
                }
                result.map_err(BreakerError::Operation)
            }
        };

        announce_outcome(NAME, outcome_of(&result), &self.hooks);
        result
    }
}
