//! Error types for the session layer.

/// Errors that can occur while persisting session state.
///
/// Note what's NOT here: reads. Looking up the token or roles never
/// errors — a session that can't be read is treated as "not logged in",
/// because that's the only safe interpretation. Only writes (login,
/// logout) surface storage problems to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The backing store failed at the I/O level (permissions, full
    /// disk, vanished directory).
    #[error("session storage failed for {context}: {source}")]
    Storage {
        context: String,
        source: std::io::Error,
    },

    /// The platform reports no user data directory, so there's nowhere
    /// to put a persistent session. Use an explicit directory or an
    /// in-memory backend instead.
    #[error("no user data directory available for session storage")]
    NoDataDir,

    /// The role list failed to serialize. Effectively unreachable for a
    /// list of strings, but surfaced rather than swallowed.
    #[error("failed to encode roles: {0}")]
    EncodeRoles(#[from] serde_json::Error),
}

impl SessionError {
    pub(crate) fn storage(
        context: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        SessionError::Storage {
            context: context.into(),
            source,
        }
    }
}
