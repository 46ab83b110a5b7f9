//! Wire types for the Reelhub catalog API.
//!
//! This module defines every JSON shape that travels between the client
//! and the remote catalog service: the entities we read (series, episodes,
//! feedback) and the payloads we write (drafts, signup, feedback
//! submissions).
//!
//! Field names here ARE the wire contract. The backend speaks snake_case,
//! which happens to be what serde derives by default for Rust structs, so
//! there are no rename attributes — what you see is what goes on the wire.

// Serde is Rust's standard serialization framework. The two key traits:
//   - `Serialize`:   "I can be turned INTO JSON"
//   - `Deserialize`: "I can be created FROM JSON"
// The `derive` macro auto-generates these implementations for our types.
use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a catalog series.
///
/// This is a "newtype wrapper" — a common Rust pattern where you wrap a
/// primitive type (here `u64`) in a named struct. Why bother?
///
/// 1. **Type safety**: You can't accidentally pass a `UserId` where a
///    `SeriesId` is expected, even though both are `u64` underneath.
/// 2. **Readability**: Signatures like `fn fetch(series: SeriesId)` are
///    clearer than `fn fetch(series: u64)`.
///
/// The `#[serde(transparent)]` attribute tells serde to serialize this as
/// just the inner `u64`, not as `{ "0": 42 }`. So a SeriesId(42) becomes
/// just `42` in JSON, which is what the backend sends and expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(pub u64);

/// Display lets us use `{}` in format strings and logging.
/// `tracing::debug!(%series_id, "loaded")` will print "series-42".
impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "series-{}", self.0)
    }
}

/// A unique identifier for an account on the catalog service.
///
/// Same newtype pattern as `SeriesId`. The backend hands this out at
/// login and the session layer persists it alongside the access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Catalog entities (read side)
// ---------------------------------------------------------------------------

/// One series as returned by the listing and detail endpoints.
///
/// Everything except the id and name is optional on the wire — the
/// catalog has plenty of half-filled records. `#[serde(default)]` means a
/// missing field decodes as `None` instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub series_id: SeriesId,
    pub name: String,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
    /// ISO date string (`"2008-01-20"`). Kept as text on the wire;
    /// presentation formatting happens at the display layer.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub num_episodes: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub maturity_rating: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
}

/// One episode inside a series detail response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub episode_number: u32,
    pub title: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
}

/// The detail endpoint's response: the series fields plus episodes and
/// aggregate rating info.
///
/// `#[serde(flatten)]` splices the `Series` fields into this struct's own
/// JSON level. The backend sends one flat object; on the Rust side we
/// still get a proper `Series` value out of it, so code that works on a
/// series (like form population) doesn't care which endpoint it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDetail {
    #[serde(flatten)]
    pub series: Series,
    #[serde(default)]
    pub episodes: Vec<Episode>,
    /// `None` when nobody has rated the series yet.
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub rating_count: u64,
}

// ---------------------------------------------------------------------------
// Catalog drafts (write side)
// ---------------------------------------------------------------------------

/// The body for series create (`POST /series`) and update
/// (`PUT /series/{id}`) requests.
///
/// The backend schema wants the first five fields always present (an
/// untouched numeric field goes up as `0`) and the rest as explicit
/// `null` when blank, which is exactly what `Option::None` serializes to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesDraft {
    pub name: String,
    pub language_code: String,
    pub origin_country: String,
    pub release_date: String,
    pub num_episodes: u32,
    pub description: Option<String>,
    pub maturity_rating: Option<String>,
    pub poster_url: Option<String>,
    pub banner_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Aggregate feedback for a series (`GET /series/{id}/feedback`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    /// `None` until the first rating lands.
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub rating_count: u64,
    #[serde(default)]
    pub items: Vec<FeedbackItem>,
}

/// One viewer's feedback entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Whole-star rating, 1 through 5.
    pub rating: u8,
    #[serde(default)]
    pub feedback_text: Option<String>,
    #[serde(default)]
    pub feedback_date: Option<String>,
    /// Display name of the author; absent for anonymized entries.
    #[serde(default)]
    pub account_name: Option<String>,
}

/// The body for a feedback submission (`POST /series/{id}/feedback`).
/// Empty review text is sent as `null`, not as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub rating: u8,
    pub feedback_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Auth payloads
// ---------------------------------------------------------------------------

/// The body of a successful `POST /auth/login` response.
///
/// `roles` carries `#[serde(default)]` because older backends omit it
/// entirely for plain accounts; a missing list means "no roles", not a
/// decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Always `"bearer"` from the current backend, but we don't enforce it.
    pub token_type: String,
    pub user_id: UserId,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// The body for `POST /auth/signup`. Goes up as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Tests for wire types and their JSON shapes.
    //!
    //! The backend defines exact JSON field names. These tests verify that
    //! our serde attributes match that contract, because a mismatch means
    //! every screen in the client silently breaks.

    use super::*;
    use serde_json::json;

    // =====================================================================
    // Identity types: SeriesId, UserId
    // =====================================================================

    #[test]
    fn test_series_id_serializes_as_plain_number() {
        // `#[serde(transparent)]` means SeriesId(42) → `42`, not `{"0":42}`.
        let json = serde_json::to_string(&SeriesId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_series_id_deserializes_from_plain_number() {
        let id: SeriesId = serde_json::from_str("42").unwrap();
        assert_eq!(id, SeriesId(42));
    }

    #[test]
    fn test_series_id_display() {
        assert_eq!(SeriesId(7).to_string(), "series-7");
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId(3).to_string(), "user-3");
    }

    // =====================================================================
    // Series — tolerant decoding of sparse records
    // =====================================================================

    #[test]
    fn test_series_decodes_with_only_required_fields() {
        // Half-filled catalog records are normal; optional fields must
        // default to None rather than failing the decode.
        let series: Series = serde_json::from_value(json!({
            "series_id": 1,
            "name": "Signal Lost"
        }))
        .unwrap();

        assert_eq!(series.series_id, SeriesId(1));
        assert_eq!(series.name, "Signal Lost");
        assert_eq!(series.release_date, None);
        assert_eq!(series.num_episodes, None);
    }

    #[test]
    fn test_series_decodes_full_record() {
        let series: Series = serde_json::from_value(json!({
            "series_id": 2,
            "name": "Harbor Lights",
            "language_code": "en",
            "origin_country": "US",
            "release_date": "2019-03-14",
            "num_episodes": 10,
            "description": "A drama.",
            "maturity_rating": "TV-14",
            "poster_url": "http://cdn/poster.jpg",
            "banner_url": "http://cdn/banner.jpg"
        }))
        .unwrap();

        assert_eq!(series.language_code.as_deref(), Some("en"));
        assert_eq!(series.num_episodes, Some(10));
    }

    #[test]
    fn test_series_decodes_explicit_nulls() {
        // The backend sends `null` for unset columns; that must behave
        // the same as the field being absent.
        let series: Series = serde_json::from_value(json!({
            "series_id": 3,
            "name": "Null Fields",
            "description": null,
            "poster_url": null
        }))
        .unwrap();

        assert_eq!(series.description, None);
        assert_eq!(series.poster_url, None);
    }

    // =====================================================================
    // SeriesDetail — flattened series plus extras
    // =====================================================================

    #[test]
    fn test_series_detail_decodes_flat_backend_object() {
        // The backend sends ONE flat object; `#[serde(flatten)]` lifts
        // the series fields out of it.
        let detail: SeriesDetail = serde_json::from_value(json!({
            "series_id": 5,
            "name": "Deep Water",
            "release_date": "2020-01-01",
            "avg_rating": 4.25,
            "rating_count": 12,
            "episodes": [
                { "episode_number": 1, "title": "Pilot", "runtime_minutes": 42 },
                { "episode_number": 2, "title": "Undertow", "synopsis": "More water." }
            ]
        }))
        .unwrap();

        assert_eq!(detail.series.series_id, SeriesId(5));
        assert_eq!(detail.series.name, "Deep Water");
        assert_eq!(detail.avg_rating, Some(4.25));
        assert_eq!(detail.rating_count, 12);
        assert_eq!(detail.episodes.len(), 2);
        assert_eq!(detail.episodes[0].title, "Pilot");
        assert_eq!(detail.episodes[1].runtime_minutes, None);
    }

    #[test]
    fn test_series_detail_decodes_without_ratings_or_episodes() {
        // A brand-new series has no episodes and a null average.
        let detail: SeriesDetail = serde_json::from_value(json!({
            "series_id": 6,
            "name": "Fresh",
            "avg_rating": null
        }))
        .unwrap();

        assert_eq!(detail.avg_rating, None);
        assert_eq!(detail.rating_count, 0);
        assert!(detail.episodes.is_empty());
    }

    // =====================================================================
    // SeriesDraft — exact write shape
    // =====================================================================

    #[test]
    fn test_series_draft_serializes_blank_optionals_as_null() {
        // The backend schema wants explicit nulls for blank optional
        // fields, not missing keys and not empty strings.
        let draft = SeriesDraft {
            name: "New Show".into(),
            language_code: "en".into(),
            origin_country: "GB".into(),
            release_date: "2024-06-01".into(),
            num_episodes: 8,
            description: None,
            maturity_rating: Some("TV-MA".into()),
            poster_url: None,
            banner_url: None,
        };
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["name"], "New Show");
        assert_eq!(json["num_episodes"], 8);
        assert!(json["description"].is_null());
        assert_eq!(json["maturity_rating"], "TV-MA");
        assert!(json["poster_url"].is_null());
    }

    // =====================================================================
    // Feedback
    // =====================================================================

    #[test]
    fn test_feedback_summary_decodes_backend_shape() {
        let summary: FeedbackSummary = serde_json::from_value(json!({
            "average_rating": 3.5,
            "rating_count": 2,
            "items": [
                {
                    "rating": 4,
                    "feedback_text": "Great pacing.",
                    "feedback_date": "2024-02-10",
                    "account_name": "rivka"
                },
                { "rating": 3 }
            ]
        }))
        .unwrap();

        assert_eq!(summary.average_rating, Some(3.5));
        assert_eq!(summary.rating_count, 2);
        assert_eq!(summary.items[0].account_name.as_deref(), Some("rivka"));
        assert_eq!(summary.items[1].feedback_text, None);
    }

    #[test]
    fn test_feedback_summary_decodes_empty_object() {
        // No ratings yet: every field defaults.
        let summary: FeedbackSummary = serde_json::from_value(json!({})).unwrap();
        assert_eq!(summary.average_rating, None);
        assert_eq!(summary.rating_count, 0);
        assert!(summary.items.is_empty());
    }

    #[test]
    fn test_new_feedback_serializes_missing_text_as_null() {
        let feedback = NewFeedback {
            rating: 5,
            feedback_text: None,
        };
        let json = serde_json::to_value(&feedback).unwrap();

        assert_eq!(json["rating"], 5);
        assert!(json["feedback_text"].is_null());
    }

    // =====================================================================
    // Auth payloads
    // =====================================================================

    #[test]
    fn test_login_response_decodes_with_roles() {
        let response: LoginResponse = serde_json::from_value(json!({
            "access_token": "tok-123",
            "token_type": "bearer",
            "user_id": 9,
            "roles": ["ADMIN", "USER"]
        }))
        .unwrap();

        assert_eq!(response.access_token, "tok-123");
        assert_eq!(response.user_id, UserId(9));
        assert_eq!(response.roles, vec!["ADMIN", "USER"]);
    }

    #[test]
    fn test_login_response_decodes_without_roles() {
        // `#[serde(default)]` — a missing roles list means no roles,
        // not a failed login.
        let response: LoginResponse = serde_json::from_value(json!({
            "access_token": "tok-456",
            "token_type": "bearer",
            "user_id": 10
        }))
        .unwrap();

        assert!(response.roles.is_empty());
    }

    #[test]
    fn test_signup_request_json_format() {
        let request = SignupRequest {
            email: "kai@example.com".into(),
            username: "kai".into(),
            password: "hunter2".into(),
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["email"], "kai@example.com");
        assert_eq!(json["username"], "kai");
        assert_eq!(json["password"], "hunter2");
    }
}
