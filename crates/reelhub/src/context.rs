//! Application context: one object wiring the whole client together.
//!
//! The original generation of this client kept its session in ambient
//! module-level state that every page poked at directly. Here the
//! wiring is explicit: an [`AppContext`] is built once at startup and
//! handed to whatever needs it. Cloning is cheap (one `Arc` bump), and
//! login/logout replace the session contents wholesale through the
//! store rather than mutating globals.

use std::sync::Arc;
use std::time::Duration;

use reelhub_client::{CatalogApi, Gateway, GatewayConfig};
use reelhub_notify::{ToastConfig, ToastRail};
use reelhub_session::{
    FileStorage, SessionConfig, SessionStore, StorageBackend,
};

use crate::error::ReelhubError;
use crate::guard::Guard;

/// Builder for configuring and assembling an [`AppContext`].
///
/// # Example
///
/// ```rust,no_run
/// use reelhub::AppContext;
///
/// # fn run() -> Result<(), reelhub::ReelhubError> {
/// let ctx = AppContext::builder()
///     .base_url("https://catalog.example.com")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct AppContextBuilder {
    base_url: String,
    timeout: Option<Duration>,
    storage: Option<Box<dyn StorageBackend>>,
    session_config: SessionConfig,
    toast_config: ToastConfig,
}

impl AppContextBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: None,
            storage: None,
            session_config: SessionConfig::default(),
            toast_config: ToastConfig::default(),
        }
    }

    /// Sets the base URL of the catalog service.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the per-request timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supplies the storage backend for session state.
    ///
    /// Defaults to [`FileStorage`] in the platform data directory;
    /// tests typically pass a `MemoryStorage` here.
    pub fn storage(mut self, storage: impl StorageBackend) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Sets the session configuration (privileged role set).
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Sets the toast configuration (display window).
    pub fn toast_config(mut self, config: ToastConfig) -> Self {
        self.toast_config = config;
        self
    }

    /// Assembles the context: storage → session store → gateway →
    /// catalog API, plus the toast rail.
    pub fn build(self) -> Result<AppContext, ReelhubError> {
        let storage: Box<dyn StorageBackend> = match self.storage {
            Some(storage) => storage,
            None => Box::new(FileStorage::default_location()?),
        };
        let session =
            Arc::new(SessionStore::new(storage, self.session_config));

        let mut gateway_config = GatewayConfig::new(self.base_url);
        if let Some(timeout) = self.timeout {
            gateway_config.timeout = Some(timeout);
        }
        let gateway =
            Arc::new(Gateway::new(gateway_config, Arc::clone(&session))?);
        let catalog = CatalogApi::new(Arc::clone(&gateway));

        tracing::debug!(base_url = gateway.base_url(), "app context built");

        Ok(AppContext {
            inner: Arc::new(ContextInner {
                session,
                gateway,
                catalog,
                toasts: ToastRail::new(self.toast_config),
            }),
        })
    }
}

impl Default for AppContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct ContextInner {
    session: Arc<SessionStore>,
    gateway: Arc<Gateway>,
    catalog: CatalogApi,
    toasts: ToastRail,
}

/// Shared handle to the assembled client: session store, gateway,
/// typed catalog API, and the toast rail.
///
/// Wrapped in `Arc` so screens and background tasks can hold clones
/// cheaply. There is exactly one session per context; login and logout
/// replace its contents, never the context itself.
#[derive(Clone)]
pub struct AppContext {
    inner: Arc<ContextInner>,
}

impl AppContext {
    /// Creates a new builder.
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::new()
    }

    /// The session store backing this context.
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// The raw gateway, for callers going off the typed paths.
    pub fn gateway(&self) -> &Gateway {
        &self.inner.gateway
    }

    /// Typed catalog endpoints.
    pub fn catalog(&self) -> &CatalogApi {
        &self.inner.catalog
    }

    /// The toast rail screens push feedback onto.
    pub fn toasts(&self) -> &ToastRail {
        &self.inner.toasts
    }

    /// An access guard reading this context's session.
    pub fn guard(&self) -> Guard {
        Guard::new(Arc::clone(&self.inner.session))
    }
}
