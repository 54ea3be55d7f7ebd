//! Application state for the HTTP server.

use std::sync::Arc;

use crate::data::{SeriesLoader, SeriesStore};
use crate::ooni::OoniClient;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Raw series store (table view; no fallback)
    pub store: Arc<dyn SeriesStore>,
    /// Fallback-chain loader (chart view)
    pub loader: SeriesLoader,
    /// Upstream OONI client
    pub ooni: Arc<OoniClient>,
}

impl AppState {
    /// Create application state from a store and an OONI client.
    pub fn new(store: Arc<dyn SeriesStore>, ooni: Arc<OoniClient>) -> Self {
        Self {
            loader: SeriesLoader::new(store.clone()),
            store,
            ooni,
        }
    }
}
