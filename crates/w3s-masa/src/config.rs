//! MASA API configuration.
//!
//! Endpoint URLs and the API key come from the environment at process
//! start. Presence is the only validation; the URLs are opaque.

use std::time::Duration;

use w3s_core::{W3sError, W3sResult};

/// How many tweets to request per search submission.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Fixed wait before each poll of the search results endpoint.
///
/// Job completion time is roughly constant in the observed service, so a
/// constant delay is used instead of exponential backoff.
pub const POLL_DELAY: Duration = Duration::from_secs(7);

/// Upper bound on result polls per search job.
pub const MAX_POLL_ATTEMPTS: u32 = 5;

/// Connection settings for the MASA search and analysis services.
#[derive(Debug, Clone)]
pub struct MasaConfig {
    pub api_key: String,
    /// Search submission endpoint (POST).
    pub search_url: String,
    /// Result polling endpoint prefix; the job id is appended verbatim.
    pub results_url: String,
    /// Sentiment analysis endpoint (POST).
    pub analysis_url: String,
    pub max_results: usize,
    pub poll_delay: Duration,
    pub max_poll_attempts: u32,
}

impl MasaConfig {
    /// Read the configuration from the environment.
    ///
    /// Required variables: `MASA_API_KEY`, `MASA_TWITTER_API_URL`,
    /// `MASA_TWITTER_RESULT_URL`, `MASA_ANALYSIS_API_URL`.
    pub fn from_env() -> W3sResult<Self> {
        Ok(Self {
            api_key: require("MASA_API_KEY")?,
            search_url: require("MASA_TWITTER_API_URL")?,
            results_url: require("MASA_TWITTER_RESULT_URL")?,
            analysis_url: require("MASA_ANALYSIS_API_URL")?,
            max_results: DEFAULT_MAX_RESULTS,
            poll_delay: POLL_DELAY,
            max_poll_attempts: MAX_POLL_ATTEMPTS,
        })
    }
}

fn require(name: &str) -> W3sResult<String> {
    std::env::var(name).map_err(|_| W3sError::config(format!("{} is not set", name)))
}
