mod common;

use circuit_guard::{
    Breaker, BreakerError, Clock, ConfigError, ManualClock, Outcome, State, SystemClock,
    TimeBreaker, MAX_OPEN_TIMEOUT,
};
use common::{fail, init_tracing, ok, TestError};
use std::sync::Arc;
use std::time::Duration;

fn manual_clock(step_ms: u64) -> Arc<ManualClock> {
    Arc::new(ManualClock::new(Duration::from_millis(step_ms)))
}

#[test]
fn test_new_rejects_invalid_timeouts() {
    let clock = manual_clock(1);

    let err = TimeBreaker::new(clock.clone(), Duration::ZERO, 1, 1).unwrap_err();
    assert_eq!(err.field(), "open_timeout");
    assert!(err.to_string().contains("open_timeout"));

    let too_long = MAX_OPEN_TIMEOUT + Duration::from_nanos(1);
    let err = TimeBreaker::new(clock.clone(), too_long, 1, 1).unwrap_err();
    assert_eq!(err, ConfigError::OpenTimeoutOutOfRange { timeout: too_long });

    // The upper bound itself is accepted
    assert!(TimeBreaker::new(clock, MAX_OPEN_TIMEOUT, 1, 1).is_ok());
}

#[test]
fn test_new_rejects_zero_thresholds() {
    let clock = manual_clock(1);

    let err = TimeBreaker::new(clock.clone(), Duration::from_secs(1), 0, 0).unwrap_err();
    assert_eq!(err.field(), "half_open_probes_threshold");

    let err = TimeBreaker::new(clock, Duration::from_secs(1), 1, 0).unwrap_err();
    assert_eq!(err.field(), "closed_failures_threshold");
    assert!(err.to_string().contains("closed_failures_threshold"));
}

#[test]
fn test_builder_defaults_are_valid() {
    let breaker = TimeBreaker::builder().build().unwrap();
    assert_eq!(breaker.state(), State::Closed);
    assert_eq!(breaker.open_timeout(), Duration::from_secs(1));
    assert_eq!(breaker.open_at(), None);

    let err = TimeBreaker::builder()
        .open_timeout(Duration::from_secs(6))
        .build()
        .unwrap_err();
    assert_eq!(err.field(), "open_timeout");
}

#[test]
fn test_closed_to_open_records_open_at() {
    let clock = manual_clock(2);
    let mut breaker = TimeBreaker::new(clock.clone(), Duration::from_millis(1), 1, 2).unwrap();

    assert_eq!(breaker.call(fail), Outcome::Failed);
    assert_eq!(breaker.state(), State::Closed);
    assert_eq!(breaker.open_at(), None);

    clock.tick();
    assert_eq!(breaker.call(fail), Outcome::Failed);
    assert_eq!(breaker.state(), State::Open);
    assert_eq!(breaker.open_at(), Some(clock.now()));
}

#[test]
fn test_scenario_reject_then_probe_closes() {
    init_tracing();
    let clock = manual_clock(2);
    let mut breaker = TimeBreaker::new(clock.clone(), Duration::from_millis(1), 1, 2).unwrap();

    assert_eq!(breaker.call(fail), Outcome::Failed);
    assert_eq!(breaker.state(), State::Closed);
    clock.tick();
    assert_eq!(breaker.call(fail), Outcome::Failed);
    assert_eq!(breaker.state(), State::Open);

    assert_eq!(breaker.call(ok), Outcome::Rejected);
    assert_eq!(breaker.state(), State::Open);

    clock.tick();
    assert_eq!(breaker.call(ok), Outcome::Succeeded);
    assert_eq!(breaker.state(), State::Closed);
    assert_eq!(breaker.open_at(), None);
    assert_eq!(breaker.closed_failures(), 0);
}

#[test]
fn test_open_rejects_until_timeout_boundary() {
    let clock = manual_clock(1);
    let timeout = Duration::from_millis(100);
    let mut breaker = TimeBreaker::new(clock.clone(), timeout, 1, 1).unwrap();

    breaker.call(fail);
    let open_at = breaker.open_at().unwrap();

    clock.advance(timeout - Duration::from_nanos(1));
    let mut ran = false;
    let outcome = breaker.call(|| -> Result<(), TestError> {
        ran = true;
        Ok(())
    });
    assert_eq!(outcome, Outcome::Rejected);
    assert!(!ran);
    assert_eq!(breaker.state(), State::Open);
    assert_eq!(breaker.open_at(), Some(open_at));

    // Exactly at open_at + timeout the call probes
    clock.advance(Duration::from_nanos(1));
    assert_eq!(breaker.call(ok), Outcome::Succeeded);
    assert_eq!(breaker.state(), State::Closed);
}

#[test]
fn test_failed_probe_below_threshold_stays_half_open() {
    let clock = manual_clock(10);
    let mut breaker = TimeBreaker::new(clock.clone(), Duration::from_millis(5), 3, 1).unwrap();

    breaker.call(fail);
    clock.tick();

    assert_eq!(breaker.call(fail), Outcome::Failed);
    assert_eq!(breaker.state(), State::HalfOpen);
    assert_eq!(breaker.half_open_probes(), 1);

    // Half-open probes run without waiting for the clock
    assert_eq!(breaker.call(fail), Outcome::Failed);
    assert_eq!(breaker.state(), State::HalfOpen);
    assert_eq!(breaker.half_open_probes(), 2);

    assert_eq!(breaker.call(ok), Outcome::Succeeded);
    assert_eq!(breaker.state(), State::Closed);
    assert_eq!(breaker.half_open_probes(), 0);
}

#[test]
fn test_failed_probes_at_threshold_reopen_with_fresh_cooldown() {
    let clock = manual_clock(10);
    let mut breaker = TimeBreaker::new(clock.clone(), Duration::from_millis(5), 2, 1).unwrap();

    breaker.call(fail);
    let first_open = breaker.open_at().unwrap();
    clock.tick();

    breaker.call(fail);
    assert_eq!(breaker.state(), State::HalfOpen);
    clock.tick();
    assert_eq!(breaker.call(fail), Outcome::Failed);
    assert_eq!(breaker.state(), State::Open);
    assert_eq!(breaker.half_open_probes(), 0);

    let reopened = breaker.open_at().unwrap();
    assert!(reopened > first_open);
    assert_eq!(reopened, clock.now());

    assert_eq!(breaker.call(ok), Outcome::Rejected);
    clock.tick();
    assert_eq!(breaker.call(ok), Outcome::Succeeded);
}

#[test]
fn test_call_with_after_cooldown_returns_value() {
    let clock = manual_clock(1000);
    let mut breaker = TimeBreaker::builder()
        .clock(clock.clone())
        .open_timeout(Duration::from_secs(1))
        .consecutive_failures(1)
        .build()
        .unwrap();

    let result = breaker.call_with(|| Err::<String, _>(TestError::new("down")));
    assert!(matches!(result, Err(BreakerError::Operation(_))));
    assert!(matches!(
        breaker.call_with(|| Ok::<_, TestError>("up".to_string())),
        Err(BreakerError::Open)
    ));

    clock.tick();
    assert_eq!(
        breaker.call_with(|| Ok::<_, TestError>("up".to_string())),
        Ok("up".to_string())
    );
}

#[test]
fn test_system_clock_breaker_recovers() {
    let mut breaker = TimeBreaker::new(Arc::new(SystemClock), Duration::from_millis(20), 1, 1).unwrap();

    breaker.call(fail);
    assert_eq!(breaker.state(), State::Open);

    std::thread::sleep(Duration::from_millis(40));
    assert_eq!(breaker.call(ok), Outcome::Succeeded);
    assert_eq!(breaker.state(), State::Closed);
}
