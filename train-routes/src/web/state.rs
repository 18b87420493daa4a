//! Application state for the web layer.

use std::sync::Arc;

use crate::router::Router;

/// Shared application state.
///
/// The router is read-only once built, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Precomputed route table
    pub router: Arc<Router>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}
