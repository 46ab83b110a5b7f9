//! Wire protocol for the Reelhub client.
//!
//! This crate defines the "language" the client and the catalog service
//! speak:
//!
//! - **Types** ([`Series`], [`SeriesDetail`], [`FeedbackSummary`],
//!   [`LoginResponse`], etc.) — the JSON structures that travel on the
//!   wire.
//! - **Outcomes** ([`Outcome`], [`Payload`], [`normalize_response`]) —
//!   how raw HTTP responses collapse into either a usable payload or a
//!   single human-readable failure message.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while encoding
//!   or decoding payloads.
//!
//! # Architecture
//!
//! The protocol layer sits between the HTTP transport (raw responses)
//! and the screens (typed data). It doesn't know about tokens, storage,
//! or URLs — it only knows shapes and the normalization rules.
//!
//! ```text
//! Transport (HTTP response) → Protocol (Outcome/Payload) → Screens (typed data)
//! ```

// ---------------------------------------------------------------------------
// Module declarations
// ---------------------------------------------------------------------------

// `mod` declares a submodule. Rust looks for the code in either:
//   - `src/types.rs` (file), or
//   - `src/types/mod.rs` (directory with mod.rs)
// We use the file approach since each module is a single file.

mod error;
mod outcome;
mod types;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

// `pub use` makes items from submodules available at the crate root.
// Users can write `use reelhub_protocol::Series` instead of
// `use reelhub_protocol::types::Series`. This is a cleaner public API.

pub use error::ProtocolError;
pub use outcome::{
    normalize_response, Outcome, Payload, GENERIC_FAILURE, MALFORMED_BODY,
};
pub use types::{
    Episode, FeedbackItem, FeedbackSummary, LoginResponse, NewFeedback,
    Series, SeriesDetail, SeriesDraft, SeriesId, SignupRequest, UserId,
};

// The status type is part of `normalize_response`'s signature, so
// re-export it; downstream crates shouldn't need their own `http`
// dependency just to call us.
pub use http::StatusCode;
