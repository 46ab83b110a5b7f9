//! Unified error type for the Reelhub SDK.

use reelhub_client::ClientError;
use reelhub_protocol::ProtocolError;
use reelhub_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `reelhub` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate.
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
///
/// Every variant is `transparent`: `to_string()` yields the underlying
/// message unchanged, so screens can show it to a person as-is.
#[derive(Debug, thiserror::Error)]
pub enum ReelhubError {
    /// A session-level error (durable storage read/write).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A gateway-level error (remote failure, payload decode).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A protocol-level error (encode, unexpected payload shape).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
