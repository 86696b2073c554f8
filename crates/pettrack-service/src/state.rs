//! Application state shared across handlers.
//!
//! The [`Store`] serializes its own writers, so handlers share it without an
//! outer lock. Configuration is fixed once the server starts.

use std::sync::Arc;

use pettrack_store::Store;

use crate::config::Config;

/// Shared application state.
pub struct AppState {
    /// The snapshot store.
    pub store: Store,
    /// Configuration the server was started with.
    pub config: Config,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Store, config: Config) -> Arc<Self> {
        Arc::new(Self { store, config })
    }
}
