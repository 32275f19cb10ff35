//! Cloneable handle that serialises access to one breaker.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::breaker::Breaker;
use crate::error::BreakerResult;
use crate::state::{Outcome, State};

/// A breaker shared between threads behind a single mutex.
///
/// Cloning is cheap and every clone drives the same breaker. The lock is held
/// for the whole call, operation included, so calls never interleave. The
/// operation must not call back into the same handle; the lock is not
/// reentrant.
pub struct SharedBreaker<B> {
    inner: Arc<Mutex<B>>,
}

impl<B: Breaker> SharedBreaker<B> {
    /// Wraps `breaker` for shared use.
    pub fn new(breaker: B) -> Self {
        Self {
            inner: Arc::new(Mutex::new(breaker)),
        }
    }

    /// Gets the current state of the circuit breaker.
    pub fn state(&self) -> State {
        self.inner.lock().state()
    }

    /// See [`Breaker::call`].
    pub fn call<E, F>(&self, f: F) -> Outcome
    where
        F: FnOnce() -> Result<(), E>,
    {
        self.inner.lock().call(f)
    }

    /// See [`Breaker::call_with`].
    pub fn call_with<T, E, F>(&self, f: F) -> BreakerResult<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.inner.lock().call_with(f)
    }

    /// Runs `f` against the wrapped breaker while holding the lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }
}

impl<B> Clone for SharedBreaker<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: Breaker> Breaker for SharedBreaker<B> {
    fn state(&self) -> State {
        self.inner.lock().state()
    }

    fn call_with<T, E, F>(&mut self, f: F) -> BreakerResult<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.inner.lock().call_with(f)
    }
}

impl<B: std::fmt::Debug> std::fmt::Debug for SharedBreaker<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedBreaker")
            .field("inner", &*self.inner.lock())
            .finish()
    }
}
