//! Typed operations on the catalog service.
//!
//! [`CatalogApi`] is a thin layer over the [`Gateway`]: it knows the
//! endpoint paths and the expected payload shapes, and translates
//! [`Outcome`]s into `Result`s. Reads decode into wire types; mutations
//! ignore whatever body the backend returns, because every screen
//! refetches after a mutation anyway.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use reelhub_protocol::{
    FeedbackSummary, NewFeedback, Outcome, ProtocolError, Series,
    SeriesDetail, SeriesDraft, SeriesId,
};

use crate::{ClientError, Gateway};

/// The catalog endpoints, typed.
#[derive(Clone)]
pub struct CatalogApi {
    gateway: Arc<Gateway>,
}

impl CatalogApi {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    // -----------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------

    /// `GET /series` — every series in the catalog.
    pub async fn list_series(&self) -> Result<Vec<Series>, ClientError> {
        decode_json(self.gateway.get("/series").await)
    }

    /// `GET /series/{id}` — one series with episodes and rating stats.
    pub async fn fetch_series(
        &self,
        id: SeriesId,
    ) -> Result<SeriesDetail, ClientError> {
        decode_json(self.gateway.get(&format!("/series/{}", id.0)).await)
    }

    /// `GET /series/{id}/feedback` — aggregate feedback and entries.
    pub async fn fetch_feedback(
        &self,
        id: SeriesId,
    ) -> Result<FeedbackSummary, ClientError> {
        decode_json(
            self.gateway
                .get(&format!("/series/{}/feedback", id.0))
                .await,
        )
    }

    // -----------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------

    /// `POST /series` — create a series from a draft.
    pub async fn create_series(
        &self,
        draft: &SeriesDraft,
    ) -> Result<(), ClientError> {
        let body = encode(draft)?;
        expect_done(self.gateway.post_json("/series", body).await)
    }

    /// `PUT /series/{id}` — replace a series with a draft.
    pub async fn update_series(
        &self,
        id: SeriesId,
        draft: &SeriesDraft,
    ) -> Result<(), ClientError> {
        let body = encode(draft)?;
        expect_done(
            self.gateway
                .put_json(&format!("/series/{}", id.0), body)
                .await,
        )
    }

    /// `DELETE /series/{id}`.
    pub async fn delete_series(&self, id: SeriesId) -> Result<(), ClientError> {
        expect_done(self.gateway.delete(&format!("/series/{}", id.0)).await)
    }

    /// `POST /series/{id}/feedback` — submit one rating with optional
    /// review text.
    pub async fn submit_feedback(
        &self,
        id: SeriesId,
        feedback: &NewFeedback,
    ) -> Result<(), ClientError> {
        let body = encode(feedback)?;
        expect_done(
            self.gateway
                .post_json(&format!("/series/{}/feedback", id.0), body)
                .await,
        )
    }
}

// ---------------------------------------------------------------------------
// Outcome translation
// ---------------------------------------------------------------------------

fn encode<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ClientError> {
    serde_json::to_value(value)
        .map_err(|e| ClientError::Protocol(ProtocolError::Encode(e)))
}

/// Success must carry JSON of the right shape; failure carries its
/// message across as a [`ClientError::Remote`].
fn decode_json<T: DeserializeOwned>(outcome: Outcome) -> Result<T, ClientError> {
    match outcome {
        Outcome::Success(payload) => Ok(payload.decode()?),
        Outcome::Failure { message } => Err(ClientError::Remote { message }),
    }
}

/// Success of any payload shape counts (mutations often answer 204 or
/// echo the entity); only the failure message matters.
fn expect_done(outcome: Outcome) -> Result<(), ClientError> {
    match outcome {
        Outcome::Success(_) => Ok(()),
        Outcome::Failure { message } => Err(ClientError::Remote { message }),
    }
}
