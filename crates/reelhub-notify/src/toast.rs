//! Toast notifications with automatic dismissal.
//!
//! A [`ToastRail`] holds the currently visible toasts. Pushing one
//! schedules its own removal after the configured display window; the
//! renderer (whatever draws the UI) only ever reads
//! [`active`](ToastRail::active) and paints what's there.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::timer::TimerHandle;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

// ---------------------------------------------------------------------------
// Toast types
// ---------------------------------------------------------------------------

/// The tone of a toast, which decides its glyph and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    /// The leading glyph a renderer shows next to the message.
    pub fn glyph(&self) -> char {
        match self {
            ToastKind::Success => '✓',
            ToastKind::Error => '✕',
            ToastKind::Warning => '!',
        }
    }
}

/// Lowercase name, matching the style-class vocabulary renderers use
/// ("success", "error", "warning").
impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
        };
        f.write_str(name)
    }
}

/// A unique identifier for one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    fn next() -> Self {
        ToastId(NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// One visible notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    /// When the toast was pushed (wall clock, for renderers that want
    /// fade-out progress).
    pub created_at: Instant,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the toast rail.
#[derive(Debug, Clone)]
pub struct ToastConfig {
    /// How long a toast stays visible before auto-dismissal.
    pub display_window: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display_window: Duration::from_millis(3000),
        }
    }
}

// ---------------------------------------------------------------------------
// ToastRail
// ---------------------------------------------------------------------------

/// The set of currently visible toasts, newest last.
///
/// Cloning a `ToastRail` clones a handle to the same rail — screens and
/// background tasks can all push into it.
///
/// ```text
/// push() ──→ [visible] ──(display window elapses)──→ auto-dismissed
///                │
///                └──(dismiss())──→ removed early, timer cancelled
/// ```
#[derive(Clone)]
pub struct ToastRail {
    inner: Arc<RailInner>,
}

struct RailInner {
    config: ToastConfig,
    // One lock over both collections: a toast and its dismissal timer
    // are inserted and removed together.
    state: Mutex<RailState>,
}

#[derive(Default)]
struct RailState {
    toasts: Vec<Toast>,
    timers: HashMap<ToastId, TimerHandle>,
}

impl ToastRail {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            inner: Arc::new(RailInner {
                config,
                state: Mutex::new(RailState::default()),
            }),
        }
    }

    /// Shows a toast and schedules its auto-dismissal.
    ///
    /// Must be called from within a Tokio runtime (the dismissal is a
    /// spawned timer task).
    pub fn push(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let toast = Toast {
            id: ToastId::next(),
            message: message.into(),
            kind,
            created_at: Instant::now(),
        };
        let id = toast.id;

        // The timer holds a Weak so a forgotten rail can be freed even
        // with dismissal timers in flight.
        let rail = Arc::downgrade(&self.inner);
        let timer = TimerHandle::spawn(self.inner.config.display_window, move || {
            if let Some(inner) = rail.upgrade() {
                RailInner::expire(&inner, id);
            }
        });

        let mut state = self.inner.state.lock();
        state.toasts.push(toast);
        state.timers.insert(id, timer);

        debug!(%id, %kind, "toast shown");
        id
    }

    /// Shorthand for a [`ToastKind::Success`] toast.
    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Success)
    }

    /// Shorthand for a [`ToastKind::Error`] toast.
    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Error)
    }

    /// Shorthand for a [`ToastKind::Warning`] toast.
    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Warning)
    }

    /// The toasts currently visible, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.inner.state.lock().toasts.clone()
    }

    /// Removes a toast before its window elapses, cancelling its timer.
    /// Returns `false` if the toast was already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let mut state = self.inner.state.lock();
        if let Some(timer) = state.timers.remove(&id) {
            timer.cancel();
        }
        let before = state.toasts.len();
        state.toasts.retain(|toast| toast.id != id);
        let removed = state.toasts.len() != before;

        if removed {
            debug!(%id, "toast dismissed early");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.state.lock().toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ToastRail {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl RailInner {
    /// Called by a toast's own timer when its window elapses.
    fn expire(inner: &Arc<RailInner>, id: ToastId) {
        let mut state = inner.state.lock();
        state.toasts.retain(|toast| toast.id != id);
        state.timers.remove(&id);
        trace!(%id, "toast expired");
    }
}
