//! Timed UI plumbing for the Reelhub client: one-shot timers, toast
//! notifications, and input debouncing.
//!
//! Everything here is built on the same primitive: a [`TimerHandle`]
//! wrapping one spawned Tokio task. Toasts use it for auto-dismissal,
//! the debouncer uses it for the quiet-period wait. Cancellation is
//! always explicit and always total — a cancelled timer's action never
//! runs, and dropping a handle never cancels.
//!
//! # Integration
//!
//! Screens push toasts after mutations and render whatever
//! [`ToastRail::active`] returns; the rail does its own housekeeping:
//!
//! ```ignore
//! ctx.toasts().success("Series saved");
//! // ...next render pass...
//! for toast in ctx.toasts().active() {
//!     println!("[{}] {}", toast.kind.glyph(), toast.message);
//! }
//! ```

mod debounce;
mod timer;
mod toast;

pub use debounce::Debouncer;
pub use timer::{TimerHandle, TimerId};
pub use toast::{Toast, ToastConfig, ToastId, ToastKind, ToastRail};
