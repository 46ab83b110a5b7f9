//! Error types for the HTTP client layer.

use reelhub_protocol::ProtocolError;

/// Errors that can occur while talking to the catalog service.
///
/// `Remote` is the interesting one: its display text IS the normalized
/// failure message from the protocol layer (the `detail` string, the
/// text body, or the generic fallback). Screens show
/// `error.to_string()` and never look deeper — that's the whole error
/// surface this client promises.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The service reported a failure, or the request never got
    /// through. The message is ready to show a human as-is.
    #[error("{message}")]
    Remote { message: String },

    /// A successful response's payload didn't fit the expected shape.
    /// Distinct from `Remote`: the service said yes but spoke a
    /// different dialect — usually a client/backend version skew.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Init(#[source] reqwest::Error),
}

impl ClientError {
    /// Shorthand for the `Remote` arm.
    pub fn remote(message: impl Into<String>) -> Self {
        ClientError::Remote {
            message: message.into(),
        }
    }
}
