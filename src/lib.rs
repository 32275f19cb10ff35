//! # circuit-guard
//!
//! Small, deterministic circuit breakers for Rust applications.
//!
//! A circuit breaker wraps a fallible operation and turns the stream of its
//! results into admission decisions. Two variants share one state model:
//!
//! - [`CountBreaker`] opens after N consecutive failures and lets a probe
//!   through after M rejected attempts. It never looks at a clock.
//! - [`TimeBreaker`] opens after N consecutive failures, stays open for a fixed
//!   cooldown measured on an injected [`Clock`], then probes.
//!
//! ## What is a Circuit Breaker?
//!
//! - **Closed**: Normal operation. Calls run and failures are counted.
//! - **Open**: Calls are rejected without running.
//! - **Half-Open**: A probe call runs to check whether the dependency recovered.
//!
//! ## Basic Usage
//!
//! ```rust
//! use circuit_guard::{Breaker, BreakerError, ManualClock, Outcome, State, TimeBreaker};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let clock = Arc::new(ManualClock::new(Duration::from_millis(500)));
//! let mut breaker = TimeBreaker::builder()
//!     .clock(clock.clone())
//!     .open_timeout(Duration::from_secs(1))
//!     .consecutive_failures(1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(breaker.call(|| Err::<(), _>("timeout")), Outcome::Failed);
//! assert_eq!(breaker.state(), State::Open);
//!
//! // Still cooling down: the operation is not executed.
//! let result = breaker.call_with(|| Ok::<_, &str>("pong"));
//! assert_eq!(result, Err(BreakerError::Open));
//!
//! clock.advance(Duration::from_secs(1));
//! assert_eq!(breaker.call_with(|| Ok::<_, &str>("pong")), Ok("pong"));
//! assert_eq!(breaker.state(), State::Closed);
//! ```
//!
//! ## Concurrency
//!
//! Breakers are plain state holders driven through `&mut self`. Wrap one in a
//! [`SharedBreaker`] to share it between threads; every call then runs under a
//! single lock.
//!
//! ## Features
//!
//! - `tracing` - Log transitions, rejections and invariant violations through
//!   `tracing` (default)

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod breaker;
mod clock;
mod config;
mod count;
mod error;
mod hook;
mod invariant;
pub mod prelude;
mod shared;
mod state;
mod time;

// Re-exports
pub use breaker::Breaker;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CountBreakerBuilder, TimeBreakerBuilder};
pub use count::CountBreaker;
pub use error::{BreakerError, BreakerResult, ConfigError};
pub use hook::HookRegistry;
pub use shared::SharedBreaker;
pub use state::{Outcome, State};
pub use time::{TimeBreaker, MAX_OPEN_TIMEOUT};
