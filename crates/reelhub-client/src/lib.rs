//! HTTP client layer for the Reelhub catalog service.
//!
//! Two pieces:
//!
//! - [`Gateway`] — assembles, authenticates, and sends requests, and
//!   funnels every response through the protocol layer's normalization.
//!   Its output is always an [`Outcome`](reelhub_protocol::Outcome),
//!   never a raw response.
//! - [`CatalogApi`] — the typed endpoint surface (`list_series`,
//!   `fetch_feedback`, ...) built on the gateway.
//!
//! The gateway reads the bearer token from the session store on every
//! request, so authentication state is never cached here.

mod catalog;
mod error;
mod gateway;

pub use catalog::CatalogApi;
pub use error::ClientError;
pub use gateway::{Gateway, GatewayConfig, RequestBody, RequestOptions};

// Callers building custom requests need these; re-exporting saves every
// downstream crate its own `http` dependency.
pub use http::{HeaderMap, Method};
