//! Internal consistency checks.
//!
//! A failed check means the breaker's own transition logic is broken, so it
//! panics instead of returning an error the caller could not act on.

/// Panics with a descriptive message when `condition` is false.
#[track_caller]
pub(crate) fn check(condition: bool, breaker: &'static str, description: &'static str) {
    if !condition {
        violated(breaker, description);
    }
}

#[cold]
#[track_caller]
fn violated(breaker: &'static str, description: &'static str) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(breaker, invariant = description, "circuit breaker invariant violated");

    panic!(
        "circuit breaker invariant violated ({}): {}",
        breaker, description
    );
}
