//! # Reelhub
//!
//! Client SDK for a remote streaming-catalog service (series, episodes,
//! viewer feedback).
//!
//! Reelhub wraps the catalog's HTTP API in typed flows: a durable
//! session store, role-gated access decisions, a gateway client that
//! normalizes every response into one success/failure shape, toast and
//! debounce utilities, and screen controllers that tie it all together
//! for an embedding shell to render.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reelhub::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = AppContext::builder()
//!     .base_url("https://catalog.example.com")
//!     .build()?;
//!
//! ctx.login("alice", "opensesame").await?;
//!
//! match AdminScreen::open(ctx.clone()).await {
//!     Ok(admin) => println!("{} series", admin.series.len()),
//!     Err(destination) => println!("go to {destination}"),
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod context;
mod error;
mod format;
mod guard;
pub mod screens;

pub use context::{AppContext, AppContextBuilder};
pub use error::ReelhubError;
pub use format::{format_date, format_rating, star_bar};
pub use guard::{Destination, Guard, GuardDecision};

/// Everything a consumer of the SDK usually needs, including the key
/// types from each sub-crate.
pub mod prelude {
    pub use crate::context::{AppContext, AppContextBuilder};
    pub use crate::error::ReelhubError;
    pub use crate::format::{format_date, format_rating, star_bar};
    pub use crate::guard::{Destination, Guard, GuardDecision};
    pub use crate::screens::{
        AdminScreen, DetailScreen, FeedbackForm, SeriesForm,
        RATING_RANGE_MESSAGE,
    };

    pub use reelhub_client::{
        CatalogApi, ClientError, Gateway, GatewayConfig, HeaderMap, Method,
        RequestBody, RequestOptions,
    };
    pub use reelhub_notify::{
        Debouncer, TimerHandle, Toast, ToastConfig, ToastId, ToastKind,
        ToastRail,
    };
    pub use reelhub_protocol::{
        Episode, FeedbackItem, FeedbackSummary, LoginResponse, NewFeedback,
        Outcome, Payload, Series, SeriesDetail, SeriesDraft, SeriesId,
        SignupRequest, UserId,
    };
    pub use reelhub_session::{
        FileStorage, MemoryStorage, SessionConfig, SessionError,
        SessionStore, StorageBackend,
    };
}
