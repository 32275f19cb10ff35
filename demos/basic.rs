//! Drives a time-based breaker against a flaky service on the real clock.
//!
//! `cargo run --example basic`

use circuit_guard::{Breaker, BreakerError, HookRegistry, TimeBreaker};
use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration;

// Custom error type that implements Error trait
#[derive(Debug)]
struct ServiceError(String);

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Service error: {}", self.0)
    }
}

impl Error for ServiceError {}

// Fails on calls 4 through 8, succeeds otherwise
fn call_service(counter: &mut u32) -> Result<String, ServiceError> {
    *counter += 1;
    if (4..=8).contains(&*counter) {
        Err(ServiceError("External service error".to_string()))
    } else {
        Ok(format!("response #{}", counter))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let mut hooks = HookRegistry::new();
    hooks.set_on_open(|| println!("Circuit OPENED"));
    hooks.set_on_half_open(|| println!("Circuit HALF-OPEN, probing"));
    hooks.set_on_close(|| println!("Circuit CLOSED"));

    let mut breaker = TimeBreaker::builder()
        .open_timeout(Duration::from_millis(800))
        .consecutive_failures(3)
        .half_open_probes(2)
        .hooks(hooks)
        .build()
        .expect("valid breaker configuration");

    println!("Circuit initial state: {}", breaker.state());

    let mut calls = 0;
    for attempt in 1..=15 {
        match breaker.call_with(|| call_service(&mut calls)) {
            Ok(response) => println!("Attempt {}: succeeded with {}", attempt, response),
            Err(BreakerError::Open) => println!("Attempt {}: rejected, circuit is open", attempt),
            Err(BreakerError::Operation(err)) => println!("Attempt {}: failed: {}", attempt, err),
        }
        println!("  state: {}", breaker.state());

        thread::sleep(Duration::from_millis(300));
    }
}
