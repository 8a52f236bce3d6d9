//! Retryable async execution wrapper.
//!
//! Wraps an arbitrary asynchronous operation behind an observable state
//! machine: `Idle`, `Loading`, `Success`, `Failed`. Failures become state,
//! not propagated faults; retry is simply another [`Execution::execute`]
//! call by the caller.
//!
//! Concurrent `execute` calls are not queued. Each call bumps a generation
//! counter and re-enters `Loading`; a completion observed under a stale
//! generation is dropped, so a slow superseded call never overwrites the
//! result of a newer one. `reset` also bumps the generation, which is why a
//! reset issued while a call is in flight sticks at `Idle`.

use std::fmt::Display;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// Observable state of a wrapped operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionState<T> {
    /// No run has started (or the wrapper was reset).
    Idle,
    /// A run is in flight.
    Loading,
    /// The most recent run completed with a value.
    Success(T),
    /// The most recent run failed; carries the rendered error message.
    Failed(String),
}

impl<T> ExecutionState<T> {
    /// Returns true in the `Idle` state.
    pub fn is_idle(&self) -> bool {
        matches!(self, ExecutionState::Idle)
    }

    /// Returns true while a run is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ExecutionState::Loading)
    }

    /// The held value, if the last run succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            ExecutionState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The held error message, if the last run failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ExecutionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

struct Inner<T> {
    state: ExecutionState<T>,
    generation: u64,
}

/// Handle around a retryable async operation.
///
/// Cloning the handle shares the state, so independent callers (or tasks)
/// can race `execute` calls; the generation guard decides which completion
/// lands.
pub struct Execution<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Execution<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Execution<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Execution<T> {
    /// Creates an idle wrapper.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: ExecutionState::Idle,
                generation: 0,
            })),
        }
    }

    /// Forces the wrapper back to `Idle`, discarding any result or error.
    ///
    /// Also supersedes any in-flight call: its completion will be dropped.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = ExecutionState::Idle;
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Execution<T> {
    /// Creates a wrapper and immediately runs one operation to completion.
    pub async fn run_immediately<F, E>(operation: F) -> Self
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let execution = Self::new();
        execution.execute(operation).await;
        execution
    }

    /// Runs one operation, tracking it through the state machine.
    ///
    /// Transitions to `Loading` synchronously, before the operation is first
    /// polled. On completion the state becomes `Success` or `Failed` unless
    /// a newer `execute` or `reset` superseded this call, in which case the
    /// completion is dropped. The caller still receives its own result:
    /// `Some(value)` on success, `None` on failure.
    pub async fn execute<F, E>(&self, operation: F) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let generation = {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.state = ExecutionState::Loading;
            inner.generation
        };

        let outcome = operation.await;

        let mut inner = self.lock();
        let stale = inner.generation != generation;
        match outcome {
            Ok(value) => {
                if stale {
                    debug!(generation, "dropping stale successful completion");
                } else {
                    inner.state = ExecutionState::Success(value.clone());
                }
                Some(value)
            }
            Err(error) => {
                let message = error.to_string();
                if stale {
                    debug!(generation, %message, "dropping stale failed completion");
                } else {
                    debug!(%message, "execution failed");
                    inner.state = ExecutionState::Failed(message);
                }
                None
            }
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ExecutionState<T> {
        self.lock().state.clone()
    }
}
