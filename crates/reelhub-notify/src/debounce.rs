//! Input debouncing: collapse a burst of calls into one deferred call.
//!
//! A [`Debouncer`] wraps an action. Each [`call`](Debouncer::call)
//! cancels the previous pending invocation and schedules a new one, so
//! during a burst (a user typing into a search box) the action runs once,
//! after the burst goes quiet, with the arguments of the last call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::trace;

use crate::timer::TimerHandle;

/// A debounced action.
///
/// Clones share the same pending slot: calling through any clone
/// supersedes a pending invocation scheduled through another.
///
/// # Invariants
///
/// - At most one invocation is pending at any time.
/// - A superseded or [`cancel`](Debouncer::cancel)led invocation never
///   runs its action.
/// - Dropping the debouncer does NOT cancel the pending invocation;
///   cancellation is always explicit (matching [`TimerHandle`]).
pub struct Debouncer<T> {
    inner: Arc<DebounceInner<T>>,
}

struct DebounceInner<T> {
    wait: Duration,
    action: Box<dyn Fn(T) + Send + Sync>,
    /// The pending invocation, tagged with its generation so a fired
    /// task only clears its own entry (never a successor racing in).
    pending: Mutex<Option<(u64, TimerHandle)>>,
    generation: AtomicU64,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wraps `action` with a quiet period of `wait`.
    pub fn new<F>(wait: Duration, action: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(DebounceInner {
                wait,
                action: Box::new(action),
                pending: Mutex::new(None),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Schedules the action with `args`, superseding any pending
    /// invocation.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call(&self, args: T) {
        let mut pending = self.inner.pending.lock();

        if let Some((generation, previous)) = pending.take() {
            previous.cancel();
            trace!(generation, "debounce superseded pending invocation");
        }

        let generation = self.inner.generation.fetch_add(1, Ordering::Relaxed) + 1;
        // The task holds a strong Arc: a pending invocation outlives the
        // debouncer handle, consistent with drop-does-not-cancel.
        let inner = Arc::clone(&self.inner);
        let timer = TimerHandle::spawn(self.inner.wait, move || {
            (inner.action)(args);
            // Clear our own slot. The generation check makes sure a
            // fired task never wipes out a successor that was scheduled
            // while the action ran.
            let mut pending = inner.pending.lock();
            if pending
                .as_ref()
                .is_some_and(|(current, _)| *current == generation)
            {
                *pending = None;
            }
        });

        *pending = Some((generation, timer));
    }

    /// Cancels the pending invocation, if any. Returns whether one was
    /// cancelled. After this, nothing fires until the next `call`.
    pub fn cancel(&self) -> bool {
        match self.inner.pending.lock().take() {
            Some((generation, timer)) => {
                timer.cancel();
                trace!(generation, "debounce cancelled");
                true
            }
            None => false,
        }
    }

    /// True while an invocation is scheduled and not yet fired.
    pub fn is_pending(&self) -> bool {
        self.inner.pending.lock().is_some()
    }

    /// The configured quiet period.
    pub fn wait(&self) -> Duration {
        self.inner.wait
    }
}

// Manual impl: `#[derive(Clone)]` would demand `T: Clone`, which the
// Arc-only clone doesn't actually need.
impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
