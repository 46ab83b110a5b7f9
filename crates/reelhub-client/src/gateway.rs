//! The HTTP gateway: one place where requests to the catalog service
//! are assembled, authenticated, and normalized.
//!
//! Every request follows the same pipeline:
//!
//! ```text
//! path + options ──→ caller headers ──→ body (json/form) ──→ bearer token
//!                                                                 │
//!            Outcome ←── normalize_response ←── send ←────────────┘
//! ```
//!
//! Header precedence mirrors what callers expect from a browser client:
//! a JSON body sets `Content-Type: application/json` only when the
//! caller didn't set one; a form body always wins and forces
//! `application/x-www-form-urlencoded`; the bearer token (when the
//! session has one) always replaces any caller `Authorization`.

use std::sync::Arc;
use std::time::Duration;

use http::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, Method};
use reelhub_protocol::{normalize_response, Outcome};
use reelhub_session::SessionStore;

use crate::ClientError;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the catalog service, e.g. `http://localhost:8000`.
    /// A trailing slash is tolerated and trimmed.
    pub base_url: String,

    /// Per-request timeout. `None` leaves requests uncapped (the
    /// transport's own connect behavior still applies).
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    /// A config with the default 30-second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

// ---------------------------------------------------------------------------
// Request options
// ---------------------------------------------------------------------------

/// A request body: JSON document or url-encoded form fields.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

/// Per-request options. The zero value is a plain GET.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<RequestBody>,
    /// Extra headers. These go on first, so a caller-set `Content-Type`
    /// survives a JSON body's default.
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: HeaderMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

/// The authenticated HTTP client for the catalog service.
///
/// Holds the session store so the bearer token is read fresh on every
/// request — log out in one part of the app and the next request from
/// anywhere goes out unauthenticated.
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl Gateway {
    /// Builds the gateway and its connection pool.
    pub fn new(
        config: GatewayConfig,
        session: Arc<SessionStore>,
    ) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Init)?;

        let base_url = config.base_url.trim_end_matches('/').to_owned();
        tracing::debug!(base_url, "gateway ready");

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store this gateway reads its token from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Sends one request and normalizes whatever comes back.
    ///
    /// This never returns an error: transport breakage, HTTP failure
    /// statuses, and mislabeled bodies all collapse into
    /// [`Outcome::Failure`] with a displayable message.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Outcome {
        let RequestOptions {
            method,
            body,
            headers,
        } = options;

        let mut headers = headers;
        if let Some(token) = self.session.token() {
            match HeaderValue::try_from(format!("Bearer {token}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(error) => {
                    // A token that can't be a header can't authenticate
                    // anything; send the request bare and let the 401
                    // surface through the normal path.
                    tracing::warn!(%error, "stored token is not header-safe");
                }
            }
        }

        let url = join_url(&self.base_url, path);
        let mut builder = self.http.request(method.clone(), url).headers(headers);
        builder = match body {
            // `.json()` sets Content-Type only when absent, `.form()`
            // likewise — which is exactly the precedence we document.
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Form(fields)) => builder.form(&fields),
            None => builder,
        };

        self.dispatch(method, path, builder).await
    }

    /// POSTs url-encoded form fields (the login endpoint's dialect).
    /// The form content type replaces anything the caller put in
    /// `headers` — a form body IS `application/x-www-form-urlencoded`.
    pub async fn form_request(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
        mut headers: HeaderMap,
    ) -> Outcome {
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        self.request(
            path,
            RequestOptions {
                method: Method::POST,
                body: Some(RequestBody::Form(fields)),
                headers,
            },
        )
        .await
    }

    // -----------------------------------------------------------------
    // Convenience wrappers
    // -----------------------------------------------------------------

    pub async fn get(&self, path: &str) -> Outcome {
        self.request(path, RequestOptions::default()).await
    }

    pub async fn delete(&self, path: &str) -> Outcome {
        self.request(
            path,
            RequestOptions {
                method: Method::DELETE,
                ..Default::default()
            },
        )
        .await
    }

    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> Outcome {
        self.request(
            path,
            RequestOptions {
                method: Method::POST,
                body: Some(RequestBody::Json(body)),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn put_json(&self, path: &str, body: serde_json::Value) -> Outcome {
        self.request(
            path,
            RequestOptions {
                method: Method::PUT,
                body: Some(RequestBody::Json(body)),
                ..Default::default()
            },
        )
        .await
    }

    // -----------------------------------------------------------------

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> Outcome {
        tracing::debug!(%method, path, "dispatching request");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%method, path, %error, "transport failure");
                return Outcome::failure(error.to_string());
            }
        };

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!(%method, path, %error, "failed reading response body");
                return Outcome::failure(error.to_string());
            }
        };

        let outcome = normalize_response(status, content_type.as_deref(), &body);
        if let Outcome::Failure { message } = &outcome {
            tracing::debug!(%method, path, %status, message, "request failed");
        }
        outcome
    }
}

/// Joins the (already-trimmed) base URL with a request path.
fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for request assembly. The full request/response
    //! pipeline is covered against a live stub server in
    //! `tests/gateway_http.rs`.

    use super::*;

    #[test]
    fn test_join_url_with_leading_slash() {
        assert_eq!(
            join_url("http://api.local", "/series"),
            "http://api.local/series"
        );
    }

    #[test]
    fn test_join_url_inserts_missing_slash() {
        assert_eq!(
            join_url("http://api.local", "series"),
            "http://api.local/series"
        );
    }

    #[test]
    fn test_config_trims_trailing_slash_via_gateway() {
        let config = GatewayConfig::new("http://api.local/");
        let session = Arc::new(SessionStore::in_memory());
        let gateway = Gateway::new(config, session).unwrap();
        assert_eq!(gateway.base_url(), "http://api.local");
    }

    #[test]
    fn test_default_options_are_a_plain_get() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_config_new_sets_default_timeout() {
        let config = GatewayConfig::new("http://api.local");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
