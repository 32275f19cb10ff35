//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::error::Error;
use std::fmt;

// Custom error type that implements Error trait
#[derive(Debug, PartialEq, Eq)]
pub struct TestError(pub String);

impl TestError {
    pub fn new(msg: &str) -> Self {
        TestError(msg.to_string())
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test error: {}", self.0)
    }
}

impl Error for TestError {}

pub fn ok() -> Result<(), TestError> {
    Ok(())
}

pub fn fail() -> Result<(), TestError> {
    Err(TestError::new("error"))
}

/// Installs a test-friendly subscriber so breaker logs show up with `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}
