//! Authentication flows: login, signup, logout.
//!
//! The login handshake is the one place the client speaks
//! form-encoding; the service's auth layer wants `username` and
//! `password` as URL-encoded form fields (an email works in the
//! `username` slot too). Signup posts plain JSON. Both land on the
//! canonical `/auth/*` paths; older path and encoding variants from
//! this client's history are gone.

use reelhub_client::{ClientError, HeaderMap};
use reelhub_protocol::{LoginResponse, ProtocolError, SignupRequest};

use crate::context::AppContext;
use crate::error::ReelhubError;
use crate::guard::Destination;

impl AppContext {
    /// Logs in and replaces the stored session wholesale.
    ///
    /// On success the store holds the fresh token, roles, and account
    /// id together; on any failure it is left untouched. The decoded
    /// response is returned for callers that want the token type or
    /// role list immediately.
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
    ) -> Result<LoginResponse, ReelhubError> {
        let fields = vec![
            ("username".to_owned(), username_or_email.to_owned()),
            ("password".to_owned(), password.to_owned()),
        ];

        let outcome = self
            .gateway()
            .form_request("/auth/login", fields, HeaderMap::new())
            .await;
        let payload = outcome.into_result().map_err(ClientError::remote)?;
        let login: LoginResponse = payload.decode()?;

        self.session().set_session(
            &login.access_token,
            &login.roles,
            login.user_id,
        )?;

        tracing::info!(
            user_id = %login.user_id,
            role_count = login.roles.len(),
            "login succeeded"
        );
        Ok(login)
    }

    /// Registers a new account.
    ///
    /// The service's success body for signup is unspecified, so it is
    /// discarded; signing up does not log the new account in.
    pub async fn signup(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), ReelhubError> {
        let request = SignupRequest {
            email: email.to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let body =
            serde_json::to_value(&request).map_err(ProtocolError::Encode)?;

        let outcome = self.gateway().post_json("/auth/signup", body).await;
        outcome.into_result().map_err(ClientError::remote)?;

        tracing::info!(username, "signup succeeded");
        Ok(())
    }

    /// Clears the stored session and says where to send the user.
    ///
    /// Idempotent: logging out twice is fine. No network call is made;
    /// the token simply stops existing on this client.
    pub fn logout(&self) -> Result<Destination, ReelhubError> {
        self.session().clear_session()?;
        tracing::info!("logged out");
        Ok(Destination::Landing)
    }
}
