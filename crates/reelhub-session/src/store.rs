//! The session store: the single authority on login state.
//!
//! Every part of the client that cares about "who is logged in" asks
//! this store. It's responsible for:
//! - Persisting the token, roles, and account id at login
//! - Clearing all three at logout
//! - Answering authentication and privilege checks
//! - Degrading gracefully when stored state is missing or mangled
//!
//! # Read semantics
//!
//! The store holds no cached state. Every accessor reads through to the
//! [`StorageBackend`], because the backend is shared mutable state — on
//! a desktop, a second window of the same app may have logged out; in
//! tests, the backend is poked directly to set up scenarios. Reads never
//! error: anything unreadable is reported as "absent", which downstream
//! means "not logged in" or "no roles". Only the write paths
//! ([`set_session`](SessionStore::set_session),
//! [`clear_session`](SessionStore::clear_session)) return `Result`,
//! because a login that didn't persist is worth knowing about.

use reelhub_protocol::UserId;

use crate::session::{ROLES_KEY, TOKEN_KEY, USER_ID_KEY};
use crate::{Session, SessionConfig, SessionError, StorageBackend};

/// Owns the storage backend and interprets what's in it.
///
/// ```text
/// login ──→ set_session() ──→ [token, roles, user_id persisted]
///                                      │
///   screens ── token()/roles()/is_privileged() ── read-through
///                                      │
/// logout ──→ clear_session() ──→ [all three keys removed]
/// ```
pub struct SessionStore {
    storage: Box<dyn StorageBackend>,
    config: SessionConfig,
}

impl SessionStore {
    /// Creates a store over the given backend.
    pub fn new(storage: impl StorageBackend, config: SessionConfig) -> Self {
        Self {
            storage: Box::new(storage),
            config,
        }
    }

    /// Convenience: an in-memory store with the default config.
    /// What tests want nine times out of ten.
    pub fn in_memory() -> Self {
        Self::new(crate::MemoryStorage::new(), SessionConfig::default())
    }

    // -----------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------

    /// Persists a fresh session: token, roles, and account id together.
    ///
    /// All three keys are always written, so a stored token always has
    /// an account id next to it. Roles go in as a JSON array to match
    /// what earlier clients left behind.
    pub fn set_session(
        &self,
        token: &str,
        roles: &[String],
        user_id: UserId,
    ) -> Result<(), SessionError> {
        let encoded_roles = serde_json::to_string(roles)?;

        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(ROLES_KEY, &encoded_roles)?;
        self.storage.set(USER_ID_KEY, &user_id.0.to_string())?;

        tracing::debug!(%user_id, role_count = roles.len(), "session stored");
        Ok(())
    }

    /// Removes the token, roles, and account id. Idempotent: clearing
    /// an already-empty session succeeds.
    pub fn clear_session(&self) -> Result<(), SessionError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(ROLES_KEY)?;
        self.storage.remove(USER_ID_KEY)?;

        tracing::debug!("session cleared");
        Ok(())
    }

    // -----------------------------------------------------------------
    // Reads (never error; see module docs)
    // -----------------------------------------------------------------

    /// The stored bearer token, if any.
    ///
    /// An empty stored string counts as "no token" — it can't
    /// authenticate anything, so reporting it would only produce
    /// requests doomed to 401.
    pub fn token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    /// The stored roles. Missing, unreadable, or malformed role data
    /// all come back as the empty list.
    pub fn roles(&self) -> Vec<String> {
        let Some(raw) = self.storage.get(ROLES_KEY).ok().flatten() else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// The stored account id, if present and parseable as a number.
    pub fn user_id(&self) -> Option<UserId> {
        self.storage
            .get(USER_ID_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse().ok())
            .map(UserId)
    }

    /// True when a (non-empty) token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// True when the session is authenticated AND holds at least one
    /// privileged role. Roles without a token mean nothing — leftover
    /// role data from a half-cleared session must not grant access.
    pub fn is_privileged(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let roles = self.roles();
        self.config
            .privileged_roles
            .iter()
            .any(|privileged| roles.iter().any(|role| role == privileged))
    }

    /// A coherent snapshot of all session fields from one read pass.
    pub fn snapshot(&self) -> Session {
        Session {
            token: self.token(),
            user_id: self.user_id(),
            roles: self.roles(),
        }
    }

    /// The configuration this store interprets sessions with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

// =========================================================================
// Tests
// =========================================================================
