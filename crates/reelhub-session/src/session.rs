//! Session state: what "being logged in" means, and under which keys
//! it persists.

use reelhub_protocol::UserId;

// ---------------------------------------------------------------------------
// Storage keys
// ---------------------------------------------------------------------------

// These key names are an external contract: earlier clients stored the
// session under exactly these names, and a persistent backend may hold
// state written by them. Renaming a key silently logs everyone out.

/// Key under which the bearer token is stored.
pub const TOKEN_KEY: &str = "access_token";

/// Key under which the role list is stored, as a JSON array of strings.
pub const ROLES_KEY: &str = "user_roles";

/// Key under which the account id is stored, as a decimal string.
pub const USER_ID_KEY: &str = "user_id";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for session interpretation.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Roles that grant access to privileged (staff-only) screens.
    /// A session is privileged when it holds at least one of these.
    pub privileged_roles: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            // The catalog service's staff roles.
            privileged_roles: vec!["ADMIN".to_owned(), "EMPLOYEE".to_owned()],
        }
    }
}

// ---------------------------------------------------------------------------
// Session snapshot
// ---------------------------------------------------------------------------

/// A point-in-time view of the stored session.
///
/// The store reads through to its backend on every accessor call, so two
/// reads can disagree if something else mutates the backend in between.
/// When a screen needs several fields that agree with each other for one
/// render, it takes a `Session` snapshot instead of separate reads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// The bearer token, if one is stored and non-empty.
    pub token: Option<String>,

    /// The stored account id, if present and parseable.
    pub user_id: Option<UserId>,

    /// The stored roles. Missing or unreadable role data is an empty
    /// list, never an error.
    pub roles: Vec<String>,
}

impl Session {
    /// True when the snapshot holds a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_both_staff_roles() {
        let config = SessionConfig::default();
        assert_eq!(config.privileged_roles, vec!["ADMIN", "EMPLOYEE"]);
    }

    #[test]
    fn test_empty_session_is_not_authenticated() {
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn test_session_with_token_is_authenticated() {
        let session = Session {
            token: Some("tok".into()),
            user_id: None,
            roles: Vec::new(),
        };
        assert!(session.is_authenticated());
    }
}
