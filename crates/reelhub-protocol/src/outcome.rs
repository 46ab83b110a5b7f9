//! Response normalization: raw HTTP responses into typed outcomes.
//!
//! Every response from the catalog service funnels through
//! [`normalize_response`], which collapses the zoo of things a backend can
//! send (empty 204s, JSON bodies, plain-text errors, mislabeled
//! content types) into exactly two cases: a successful [`Payload`] or a
//! [`Failure`](Outcome::Failure) carrying one human-readable message.
//!
//! That single message string is the only error surface screens ever
//! show. Status codes and headers stop existing past this point.

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ProtocolError;

/// The message used when a failing response carries nothing usable:
/// no `detail` field, no text body, nothing.
pub const GENERIC_FAILURE: &str = "Request failed";

/// The message used when a response claims `application/json` but the
/// body doesn't parse.
pub const MALFORMED_BODY: &str = "Malformed response from server";

// ---------------------------------------------------------------------------
// Payload — what a successful response carried
// ---------------------------------------------------------------------------

/// The decoded body of a successful response.
///
/// The service mostly speaks JSON, but a 204 has no body at all and a
/// misconfigured proxy can hand back plain text. Keeping all three cases
/// explicit means callers decide what shape they require instead of the
/// transport guessing for them.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A parsed JSON document.
    Json(Value),

    /// A non-JSON body, kept verbatim.
    Text(String),

    /// No body (HTTP 204).
    Empty,
}

impl Payload {
    /// Decode a JSON payload into a typed value.
    ///
    /// Takes `self` by value: the payload is the response body, and once
    /// it's been decoded there's nothing else to do with it.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ProtocolError> {
        match self {
            Payload::Json(value) => {
                serde_json::from_value(value).map_err(ProtocolError::Decode)
            }
            other => Err(ProtocolError::UnexpectedPayload(other.kind())),
        }
    }

    /// A short noun for what this payload is, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Json(_) => "a JSON body",
            Payload::Text(_) => "a text body",
            Payload::Empty => "an empty body",
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }
}

// ---------------------------------------------------------------------------
// Outcome — success or failure, nothing in between
// ---------------------------------------------------------------------------

/// The normalized result of one request.
///
/// This is a plain two-armed enum rather than `Result` because the
/// failure arm is not an error type — it's a display string that has
/// already absorbed every distinction (HTTP status, `detail` field,
/// text body, transport breakage) a screen could care about.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The service said yes. The payload may still be empty (204).
    Success(Payload),

    /// The service said no, or we never reached it. `message` is ready
    /// to show a human as-is.
    Failure { message: String },
}

impl Outcome {
    /// Shorthand for building the failure arm.
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Convert into a `Result`, with the failure message as the error.
    pub fn into_result(self) -> Result<Payload, String> {
        match self {
            Outcome::Success(payload) => Ok(payload),
            Outcome::Failure { message } => Err(message),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Collapse a raw HTTP response into an [`Outcome`].
///
/// The rules, in order:
///
/// 1. **204** is success with an empty payload, before anything else —
///    a 204 never has a meaningful body, so we never try to read one.
/// 2. If the content type mentions `application/json`, the body must
///    parse as JSON. A body that lies about being JSON is a failure
///    ([`MALFORMED_BODY`]), even on a 2xx status.
/// 3. Any other content type is kept as text.
/// 4. Non-2xx statuses become failures. The message is mined from the
///    payload: a JSON object's `detail` field first, then a non-empty
///    text body, then [`GENERIC_FAILURE`].
///
/// Transport-level breakage (connection refused, timeouts) never reaches
/// this function; the HTTP layer turns those into failures directly.
pub fn normalize_response(
    status: StatusCode,
    content_type: Option<&str>,
    body: &[u8],
) -> Outcome {
    if status == StatusCode::NO_CONTENT {
        return Outcome::Success(Payload::Empty);
    }

    let declares_json = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);

    let payload = if declares_json {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Payload::Json(value),
            Err(_) => return Outcome::failure(MALFORMED_BODY),
        }
    } else {
        Payload::Text(String::from_utf8_lossy(body).into_owned())
    };

    if !status.is_success() {
        return Outcome::failure(failure_message(&payload));
    }

    Outcome::Success(payload)
}

/// Pick the most specific human-readable message a failing payload offers.
fn failure_message(payload: &Payload) -> String {
    match payload {
        Payload::Json(value) => match value.get("detail") {
            // The backend's usual shape: {"detail": "Incorrect password"}.
            Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
            // Validation errors arrive as structured detail (a list of
            // field problems). Serialize compactly rather than showing
            // the user nothing at all.
            Some(detail) if !detail.is_null() => detail.to_string(),
            _ => GENERIC_FAILURE.to_string(),
        },
        Payload::Text(text) if !text.is_empty() => text.clone(),
        _ => GENERIC_FAILURE.to_string(),
    }
}

// =========================================================================
// Tests
// =========================================================================
