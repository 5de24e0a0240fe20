//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{CatalogClient, CatalogGateway};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the catalog gateway and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<dyn CatalogGateway>,
}

impl AppState {
    /// Create application state backed by the HTTP catalog client.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Arc::new(CatalogClient::new(&config.catalog));
        Self::with_gateway(config, catalog)
    }

    /// Create application state around an explicit gateway.
    ///
    /// Tests pass an in-memory gateway here.
    #[must_use]
    pub fn with_gateway(config: StorefrontConfig, catalog: Arc<dyn CatalogGateway>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog gateway.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogGateway {
        self.inner.catalog.as_ref()
    }
}
