//! Re-exports common types for convenient usage.
//!
//! # Example
//! ```rust
//! use circuit_guard::prelude::*;
//!
//! let mut breaker = CountBreaker::new(3, 2).unwrap();
//! assert_eq!(breaker.call(|| Ok::<(), ()>(())), Outcome::Succeeded);
//! ```

pub use crate::breaker::Breaker;
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::count::CountBreaker;
pub use crate::error::{BreakerError, BreakerResult, ConfigError};
pub use crate::shared::SharedBreaker;
pub use crate::state::{Outcome, State};
pub use crate::time::TimeBreaker;
