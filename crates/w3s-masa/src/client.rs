//! HTTP client for the MASA services.

use std::time::Duration;

use crate::config::MasaConfig;

/// Client for the MASA search and analysis APIs.
///
/// Holds one `reqwest::Client` for connection reuse across calls. All
/// public operations degrade failures to empty results instead of
/// returning errors; see [`crate::search`] and [`crate::analysis`].
#[derive(Clone)]
pub struct MasaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: MasaConfig,
}

impl MasaClient {
    /// Create a new client for the given configuration.
    pub fn new(config: MasaConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { http, config }
    }

    pub fn config(&self) -> &MasaConfig {
        &self.config
    }
}
