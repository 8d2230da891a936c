//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::GranelConfig;
use crate::db::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the storage backend selected at startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: GranelConfig,
    store: Store,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: GranelConfig, store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &GranelConfig {
        &self.inner.config
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }
}
