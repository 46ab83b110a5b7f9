//! Access decisions derived from session state.
//!
//! Guards run synchronously, once per screen open, before that screen
//! does any network work. They never mutate the session. A denied
//! guard doesn't navigate anywhere itself; it returns where the
//! embedding shell should send the user, and the shell does the rest.

use std::sync::Arc;

use reelhub_session::SessionStore;

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

/// The two places a denied guard can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Unauthenticated landing page (login and signup).
    Landing,
    /// Signed-in home page, for users without admin access.
    Home,
}

impl Destination {
    /// Page path for shells that navigate by URL.
    pub fn page_path(&self) -> &'static str {
        match self {
            Destination::Landing => "index.html",
            Destination::Home => "home.html",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.page_path())
    }
}

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The current session may proceed to the screen.
    Allow,
    /// The shell should navigate away instead of showing the screen.
    Redirect(Destination),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    /// The navigation target, if this decision denies access.
    pub fn redirect_target(&self) -> Option<Destination> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::Redirect(destination) => Some(*destination),
        }
    }
}

// ---------------------------------------------------------------------------
// Guard
// ---------------------------------------------------------------------------

/// Pure decision functions over the session store.
pub struct Guard {
    session: Arc<SessionStore>,
}

impl Guard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    /// Denies anonymous sessions.
    pub fn require_authenticated(&self) -> GuardDecision {
        if self.session.is_authenticated() {
            GuardDecision::Allow
        } else {
            tracing::debug!("guard denied: not authenticated");
            GuardDecision::Redirect(Destination::Landing)
        }
    }

    /// Denies anonymous sessions and authenticated ones that hold no
    /// privileged role. The two denials differ: an anonymous user goes
    /// to the landing page, a signed-in unprivileged one goes home.
    pub fn require_privileged(&self) -> GuardDecision {
        if !self.session.is_authenticated() {
            tracing::debug!("guard denied: not authenticated");
            return GuardDecision::Redirect(Destination::Landing);
        }
        if !self.session.is_privileged() {
            tracing::debug!("guard denied: not privileged");
            return GuardDecision::Redirect(Destination::Home);
        }
        GuardDecision::Allow
    }

    /// Sends an already-signed-in user away from the login and signup
    /// pages; anonymous users stay put.
    pub fn redirect_if_authenticated(
        &self,
        destination: Destination,
    ) -> GuardDecision {
        if self.session.is_authenticated() {
            GuardDecision::Redirect(destination)
        } else {
            GuardDecision::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use reelhub_protocol::UserId;

    use super::*;

    fn anonymous() -> Guard {
        Guard::new(Arc::new(SessionStore::in_memory()))
    }

    fn with_roles(roles: &[&str]) -> Guard {
        let store = Arc::new(SessionStore::in_memory());
        let roles: Vec<String> =
            roles.iter().map(|r| (*r).to_owned()).collect();
        store.set_session("tok", &roles, UserId(1)).unwrap();
        Guard::new(store)
    }

    #[test]
    fn test_require_authenticated_anonymous_redirects_to_landing() {
        let decision = anonymous().require_authenticated();
        assert_eq!(
            decision,
            GuardDecision::Redirect(Destination::Landing)
        );
        assert!(!decision.is_allowed());
    }

    #[test]
    fn test_require_authenticated_signed_in_allows() {
        assert!(with_roles(&[]).require_authenticated().is_allowed());
    }

    #[test]
    fn test_require_privileged_anonymous_redirects_to_landing() {
        assert_eq!(
            anonymous().require_privileged(),
            GuardDecision::Redirect(Destination::Landing)
        );
    }

    #[test]
    fn test_require_privileged_plain_user_redirects_home() {
        assert_eq!(
            with_roles(&["USER"]).require_privileged(),
            GuardDecision::Redirect(Destination::Home)
        );
    }

    #[test]
    fn test_require_privileged_admin_allows() {
        assert!(with_roles(&["ADMIN"]).require_privileged().is_allowed());
        assert!(with_roles(&["EMPLOYEE"]).require_privileged().is_allowed());
    }

    #[test]
    fn test_require_privileged_leaves_session_untouched() {
        let store = Arc::new(SessionStore::in_memory());
        store
            .set_session("tok", &["USER".to_owned()], UserId(7))
            .unwrap();
        let guard = Guard::new(Arc::clone(&store));

        guard.require_privileged();

        assert_eq!(store.token(), Some("tok".to_owned()));
        assert_eq!(store.roles(), vec!["USER".to_owned()]);
        assert_eq!(store.user_id(), Some(UserId(7)));
    }

    #[test]
    fn test_redirect_if_authenticated_moves_signed_in_users_on() {
        assert_eq!(
            with_roles(&[]).redirect_if_authenticated(Destination::Home),
            GuardDecision::Redirect(Destination::Home)
        );
        assert!(anonymous()
            .redirect_if_authenticated(Destination::Home)
            .is_allowed());
    }

    #[test]
    fn test_destination_page_paths() {
        assert_eq!(Destination::Landing.page_path(), "index.html");
        assert_eq!(Destination::Home.page_path(), "home.html");
        assert_eq!(Destination::Home.to_string(), "home.html");
    }

    #[test]
    fn test_redirect_target_extraction() {
        assert_eq!(GuardDecision::Allow.redirect_target(), None);
        assert_eq!(
            GuardDecision::Redirect(Destination::Landing).redirect_target(),
            Some(Destination::Landing)
        );
    }
}
