//! Shared state model for both breaker variants.

use std::fmt::{self, Display, Formatter};

/// Represents the possible states of a circuit breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Circuit is closed and operations are executed.
    Closed,

    /// Circuit is open and operations are rejected without running.
    Open,

    /// Circuit is letting a probe through to test recovery.
    HalfOpen,
}

impl State {
    /// Short lowercase label, used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            State::Closed => "closed",
            State::Open => "open",
            State::HalfOpen => "half-open",
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single call made through a breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The breaker refused admission; the operation was never executed.
    Rejected,

    /// The operation ran and returned an error.
    Failed,

    /// The operation ran and returned successfully.
    Succeeded,
}

impl Outcome {
    /// Returns true if the operation was executed.
    pub fn was_executed(self) -> bool {
        !matches!(self, Outcome::Rejected)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Rejected => write!(f, "rejected"),
            Outcome::Failed => write!(f, "failed"),
            Outcome::Succeeded => write!(f, "succeeded"),
        }
    }
}
