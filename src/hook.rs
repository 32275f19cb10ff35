//! Hook registry for circuit breaker events.

use crate::state::{Outcome, State};
use std::fmt;
use std::sync::Arc;

type HookFn = Arc<dyn Fn() + Send + Sync + 'static>;

/// A registry for circuit breaker event hooks.
///
/// Hooks observe the breaker; they never affect admission decisions.
#[derive(Clone, Default)]
pub struct HookRegistry {
    on_open: Option<HookFn>,
    on_close: Option<HookFn>,
    on_half_open: Option<HookFn>,
    on_success: Option<HookFn>,
    on_failure: Option<HookFn>,
    on_rejected: Option<HookFn>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hook to call when the circuit breaker opens.
    pub fn set_on_open<F>(&mut self, f: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_open = Some(Arc::new(f));
    }

    /// Sets the hook to call when the circuit breaker closes.
    pub fn set_on_close<F>(&mut self, f: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(f));
    }

    /// Sets the hook to call when the circuit breaker half-opens.
    pub fn set_on_half_open<F>(&mut self, f: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_half_open = Some(Arc::new(f));
    }

    /// Sets the hook to call when an executed operation succeeds.
    pub fn set_on_success<F>(&mut self, f: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_success = Some(Arc::new(f));
    }

    /// Sets the hook to call when an executed operation fails.
    pub fn set_on_failure<F>(&mut self, f: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_failure = Some(Arc::new(f));
    }

    /// Sets the hook to call when a call is rejected without running.
    pub fn set_on_rejected<F>(&mut self, f: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_rejected = Some(Arc::new(f));
    }

    pub(crate) fn execute_state_transition_hook(&self, to: State) {
        let hook = match to {
            State::Open => &self.on_open,
            State::Closed => &self.on_close,
            State::HalfOpen => &self.on_half_open,
        };
        if let Some(hook) = hook {
            hook();
        }
    }

    pub(crate) fn execute_outcome_hook(&self, outcome: Outcome) {
        let hook = match outcome {
            Outcome::Succeeded => &self.on_success,
            Outcome::Failed => &self.on_failure,
            Outcome::Rejected => &self.on_rejected,
        };
        if let Some(hook) = hook {
            hook();
        }
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_half_open", &self.on_half_open.is_some())
            .field("on_success", &self.on_success.is_some())
            .field("on_failure", &self.on_failure.is_some())
            .field("on_rejected", &self.on_rejected.is_some())
            .finish()
    }
}
