//! Application state for the web layer.

use std::sync::Arc;

use crate::acis::AcisClient;

/// Shared application state.
///
/// Read-only: every request builds its own arrivals.
#[derive(Clone)]
pub struct AppState {
    /// Arrivals board client
    pub client: Arc<AcisClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(client: AcisClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}
