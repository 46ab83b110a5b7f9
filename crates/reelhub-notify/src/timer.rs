//! One-shot timers built on Tokio tasks.
//!
//! A [`TimerHandle`] is the owned side of a scheduled action: drop it and
//! the action still fires (fire-and-forget is the common case for
//! toasts), call [`cancel`](TimerHandle::cancel) and it never does.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::trace;

/// Process-wide counter for timer ids. Relaxed ordering is enough —
/// the ids only need to be unique, not ordered against other memory.
static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn next() -> Self {
        TimerId(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// A scheduled one-shot action.
///
/// Created by [`TimerHandle::spawn`]. The action runs once after the
/// delay unless [`cancel`](TimerHandle::cancel) is called first.
///
/// # Cancellation is total
///
/// Cancelling aborts the backing task. If the delay hasn't elapsed, the
/// action never runs; if the action already ran, cancelling is a no-op.
/// There is no in-between: the action body itself is synchronous, so an
/// abort can't land in the middle of it.
///
/// # Dropping does NOT cancel
///
/// The backing task is detached. A caller that pushes a toast and walks
/// away still gets the auto-dismiss; cancellation is always an explicit
/// decision.
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    task: tokio::task::JoinHandle<()>,
}

impl TimerHandle {
    /// Schedules `action` to run once after `delay`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<F>(delay: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let id = TimerId::next();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });

        trace!(%id, delay_ms = delay.as_millis() as u64, "timer scheduled");
        Self { id, task }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Prevents the action from running, if it hasn't already.
    pub fn cancel(&self) {
        self.task.abort();
        trace!(id = %self.id, "timer cancelled");
    }

    /// True once the backing task has completed — either because the
    /// action ran or because the timer was cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

// =========================================================================
// Tests
// =========================================================================
