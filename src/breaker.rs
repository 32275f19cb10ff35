//! The capability shared by every breaker variant.

use crate::error::{BreakerError, BreakerResult};
use crate::hook::HookRegistry;
use crate::state::{Outcome, State};

/// A guard that decides whether to run an operation and learns from its result.
///
/// Implementors are plain state holders: calls take `&mut self`, run the
/// operation inline on the calling thread and never suspend. Share one
/// instance across threads through [`SharedBreaker`](crate::SharedBreaker).
pub trait Breaker {
    /// Gets the current state of the circuit breaker.
    fn state(&self) -> State;

    /// Executes `f` if the breaker admits it, keeping the operation's value and error.
    ///
    /// Returns `Err(BreakerError::Open)` without running `f` when the call is
    /// rejected.
    fn call_with<T, E, F>(&mut self, f: F) -> BreakerResult<T, E>
    where
        F: FnOnce() -> Result<T, E>;

    /// Executes `f` if the breaker admits it and reports what happened.
    fn call<E, F>(&mut self, f: F) -> Outcome
    where
        F: FnOnce() -> Result<(), E>,
    {
        outcome_of(&self.call_with(f))
    }
}

pub(crate) fn outcome_of<T, E>(result: &BreakerResult<T, E>) -> Outcome {
    match result {
        Ok(_) => Outcome::Succeeded,
        Err(BreakerError::Operation(_)) => Outcome::Failed,
        Err(BreakerError::Open) => Outcome::Rejected,
    }
}

/// Logs a state change and fires the matching hook.
pub(crate) fn announce_transition(
    breaker: &'static str,
    from: State,
    to: State,
    hooks: &HookRegistry,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        breaker,
        from = from.as_str(),
        to = to.as_str(),
        "circuit state transition"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (breaker, from);

    hooks.execute_state_transition_hook(to);
}

/// Logs the outcome of a call and fires the matching hook.
pub(crate) fn announce_outcome(breaker: &'static str, outcome: Outcome, hooks: &HookRegistry) {
    if outcome == Outcome::Rejected {
        #[cfg(feature = "tracing")]
        tracing::trace!(breaker, "call rejected by open circuit");
    }
    #[cfg(not(feature = "tracing"))]
    let _ = breaker;

    hooks.execute_outcome_hook(outcome);
}
