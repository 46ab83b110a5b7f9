//! Screen controllers: view state plus the operations that drive it.
//!
//! A controller owns no rendering. Each one holds plain data an
//! embedding shell can draw (rows, form fields, inline error text) and
//! async operations that change that data through the catalog API.
//! Remote failures land in inline text fields; nothing here panics or
//! retries, and every mutation is followed by a full reload of what it
//! touched.
//!
//! Opening a screen checks its guard first, synchronously, before any
//! network work. A denied open returns the [`Destination`] the shell
//! should navigate to instead.
//!
//! [`Destination`]: crate::guard::Destination

mod admin;
mod detail;

pub use admin::{AdminScreen, SeriesForm};
pub use detail::{DetailScreen, FeedbackForm, RATING_RANGE_MESSAGE};
