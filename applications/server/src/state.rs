/// Shared application state
use albumstore_core::AlbumStorage;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AlbumStorage>,
}

impl AppState {
    pub fn new(store: Arc<dyn AlbumStorage>) -> Self {
        Self { store }
    }
}
