//! Breaker whose cooldown is measured on an injected clock.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::breaker::{announce_outcome, announce_transition, outcome_of, Breaker};
use crate::clock::Clock;
use crate::config::TimeBreakerBuilder;
use crate::error::{require_positive, BreakerError, BreakerResult, ConfigError};
use crate::hook::HookRegistry;
use crate::invariant::check;
use crate::state::State;

const NAME: &str = "time";

/// Longest accepted open timeout.
pub const MAX_OPEN_TIMEOUT: Duration = Duration::from_secs(5);

/// A circuit breaker that stays open for a fixed cooldown before probing.
///
/// The breaker reads time only from its [`Clock`]. Once `open_timeout` has
/// elapsed since it opened, the next call moves it to half-open and runs as a
/// probe within that same call. A successful probe closes the breaker;
/// `half_open_probes_threshold` failed probes re-open it with a fresh cooldown.
#[derive(Debug)]
pub struct TimeBreaker {
    clock: Arc<dyn Clock>,
    state: State,
    open_timeout: Duration,
    open_at: Option<Instant>,
    closed_failures: u32,
    closed_failures_threshold: u32,
    half_open_probes: u32,
    half_open_probes_threshold: u32,
    hooks: HookRegistry,
}

impl TimeBreaker {
    /// Creates a closed breaker reading time from `clock`.
    ///
    /// Fails if `open_timeout` is zero or longer than [`MAX_OPEN_TIMEOUT`], or
    /// if either threshold is zero.
    pub fn new(
        clock: Arc<dyn Clock>,
        open_timeout: Duration,
        half_open_probes_threshold: u32,
        closed_failures_threshold: u32,
    ) -> Result<Self, ConfigError> {
        Self::from_parts(
            clock,
            open_timeout,
            half_open_probes_threshold,
            closed_failures_threshold,
            HookRegistry::new(),
        )
    }

    /// Creates a new builder for customizing a time-based breaker.
    pub fn builder() -> TimeBreakerBuilder {
        TimeBreakerBuilder::new()
    }

    pub(crate) fn from_parts(
        clock: Arc<dyn Clock>,
        open_timeout: Duration,
        half_open_probes_threshold: u32,
        closed_failures_threshold: u32,
        hooks: HookRegistry,
    ) -> Result<Self, ConfigError> {
        if open_timeout.is_zero() || open_timeout > MAX_OPEN_TIMEOUT {
            return Err(ConfigError::OpenTimeoutOutOfRange {
                timeout: open_timeout,
            });
        }
        let half_open_probes_threshold =
            require_positive("half_open_probes_threshold", half_open_probes_threshold)?;
        let closed_failures_threshold =
            require_positive("closed_failures_threshold", closed_failures_threshold)?;

        Ok(Self {
            clock,
            state: State::Closed,
            open_timeout,
            open_at: None,
            closed_failures: 0,
            closed_failures_threshold,
            half_open_probes: 0,
            half_open_probes_threshold,
            hooks,
        })
    }

    /// Consecutive failures seen while closed.
    pub fn closed_failures(&self) -> u32 {
        self.closed_failures
    }

    /// Failed probes since the breaker last went half-open.
    pub fn half_open_probes(&self) -> u32 {
        self.half_open_probes
    }

    /// When the breaker last opened, if it has not closed since.
    pub fn open_at(&self) -> Option<Instant> {
        self.open_at
    }

    /// How long the breaker stays open before probing.
    pub fn open_timeout(&self) -> Duration {
        self.open_timeout
    }

    fn cooled_down(&self, open_at: Instant, now: Instant) -> bool {
        now >= open_at + self.open_timeout
    }

    fn check_invariants(&self) {
        match self.state {
            State::Closed => {
                check(
                    self.closed_failures < self.closed_failures_threshold,
                    NAME,
                    "closed: closed_failures < closed_failures_threshold",
                );
                check(self.half_open_probes == 0, NAME, "closed: half_open_probes == 0");
                check(self.open_at.is_none(), NAME, "closed: open_at is unset");
            }
            State::Open => {
                check(
                    self.closed_failures == self.closed_failures_threshold,
                    NAME,
                    "open: closed_failures == closed_failures_threshold",
                );
                check(self.half_open_probes == 0, NAME, "open: half_open_probes == 0");
                check(self.open_at.is_some(), NAME, "open: open_at is set");
            }
            State::HalfOpen => {
                check(
                    self.closed_failures == self.closed_failures_threshold,
                    NAME,
                    "half-open: closed_failures == closed_failures_threshold",
                );
                check(
                    self.half_open_probes < self.half_open_probes_threshold,
                    NAME,
                    "half-open: half_open_probes < half_open_probes_threshold",
                );
                let cooled = self
                    .open_at
                    .is_some_and(|open_at| self.cooled_down(open_at, self.clock.now()));
                check(cooled, NAME, "half-open: open timeout has elapsed");
            }
        }
    }

    fn transition(&mut self, to: State) {
        let from = self.state;
        self.state = to;
        announce_transition(NAME, from, to, &self.hooks);
    }

    fn trip(&mut self) {
        self.open_at = Some(self.clock.now());
        self.transition(State::Open);
    }

    fn probe<T, E, F>(&mut self, f: F) -> BreakerResult<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let result = f();
        if result.is_err() {
            self.half_open_probes += 1;
            if self.half_open_probes == self.half_open_probes_threshold {
                self.half_open_probes = 0;
                self.trip();
            }
        } else {
            self.closed_failures = 0;
            self.half_open_probes = 0;
            self.open_at = None;
            self.transition(State::Closed);
        }
        result.map_err(BreakerError::Operation)
    }
}

impl Breaker for TimeBreaker {
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
                        self.trip();
                    }
                } else {
                    self.closed_failures = 0;
                }
                result.map_err(BreakerError::Operation)
            }
            State::Open => match self.open_at {
                Some(open_at) if self.cooled_down(open_at, self.clock.now()) => {
                    // The call that notices the elapsed timeout is itself the probe.
                    self.half_open_probes = 0;
                    self.transition(State::HalfOpen);
                    self.probe(f)
                }
                _ => Err(BreakerError::Open),
            },
            State::HalfOpen => self.probe(f),
        };

        announce_outcome(NAME, outcome_of(&result), &self.hooks);
        result
    }
}
