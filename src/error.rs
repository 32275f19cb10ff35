//! Error types for the circuit breaker library.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

/// Result type for value-carrying breaker calls.
pub type BreakerResult<T, E> = Result<T, BreakerError<E>>;

/// Error type for value-carrying breaker calls.
#[derive(Debug, PartialEq, Eq)]
pub enum BreakerError<E> {
    /// The circuit is open, the operation was not executed.
    Open,

    /// The underlying operation ran and failed.
    Operation(E),
}

impl<E> BreakerError<E> {
    /// Returns the operation error, if the operation ran.
    pub fn into_operation(self) -> Option<E> {
        match self {
            BreakerError::Open => None,
            BreakerError::Operation(e) => Some(e),
        }
    }
}

impl<E> Display for BreakerError<E>
where
    E: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BreakerError::Open => write!(f, "Circuit breaker is open"),
            BreakerError::Operation(e) => write!(f, "Operation error: {}", e),
        }
    }
}

impl<E: Error + 'static> Error for BreakerError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BreakerError::Open => None,
            BreakerError::Operation(e) => Some(e),
        }
    }
}

/// Invalid breaker configuration, reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A threshold that must be positive was zero.
    ZeroThreshold {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// The open timeout was zero or above [`MAX_OPEN_TIMEOUT`](crate::MAX_OPEN_TIMEOUT).
    OpenTimeoutOutOfRange {
        /// The rejected timeout.
        timeout: Duration,
    },
}

impl ConfigError {
    /// Name of the parameter that violated its constraint.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::ZeroThreshold { field } => field,
            ConfigError::OpenTimeoutOutOfRange { .. } => "open_timeout",
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroThreshold { field } => write!(f, "{}: must be greater than 0", field),
            ConfigError::OpenTimeoutOutOfRange { timeout } => write!(
                f,
                "open_timeout: {:?} is outside 0s < timeout <= {:?}",
                timeout,
                crate::MAX_OPEN_TIMEOUT
            ),
        }
    }
}

impl Error for ConfigError {}

/// Fails with [`ConfigError::ZeroThreshold`] when `value` is zero.
pub(crate) fn require_positive(field: &'static str, value: u32) -> Result<u32, ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroThreshold { field });
    }
    Ok(value)
}
