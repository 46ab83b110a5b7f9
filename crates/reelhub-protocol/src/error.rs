//! Error types for the protocol layer.
//!
//! Each crate in Reelhub defines its own error enum. This keeps errors
//! specific and meaningful — when you see a `ProtocolError`, you know
//! the problem is in encoding/decoding payloads, not in networking or
//! session storage.

/// Errors that can occur in the protocol layer.
///
/// `#[derive(thiserror::Error)]` auto-generates the `std::error::Error`
/// trait implementation. The `#[error("...")]` attributes define the
/// human-readable message for each variant — what you see when you
/// print the error or it shows up in logs.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust type into JSON).
    ///
    /// Nearly impossible for our plain structs, but the type system
    /// doesn't know that, and swallowing it would be worse.
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning JSON into a Rust type).
    ///
    /// Common causes: a backend running a newer schema, missing required
    /// fields, or a field changing type between releases.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The response was valid HTTP but the wrong kind of payload —
    /// e.g. we needed JSON and got plain text or an empty 204 body.
    ///
    /// The inner `&'static str` is a short noun ("a text body") that
    /// slots into the message.
    #[error("expected a JSON body, got {0}")]
    UnexpectedPayload(&'static str),
}
