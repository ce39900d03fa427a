//! Application state.

use std::sync::Arc;

use w3s_masa::MasaClient;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<MasaClient>,
}

impl AppState {
    pub fn new(client: Arc<MasaClient>) -> Self {
        Self { client }
    }
}
