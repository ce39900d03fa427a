//! Sentiment analysis via the MASA analysis API.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::client::MasaClient;

/// Substituted when the analysis call succeeds but the response carries
/// no narrative. Deliberately a present narrative, not an absent one, so
/// downstream classification still runs over it.
const ANALYSIS_PLACEHOLDER: &str = "Analysis not available.";

#[derive(Serialize)]
struct AnalysisRequest<'a> {
    tweets: &'a [String],
    prompt: String,
}

#[derive(Deserialize)]
struct AnalysisResponse {
    #[serde(default)]
    analysis: Option<String>,
}

impl MasaClient {
    /// Ask the analysis service for a sentiment narrative about `subject`
    /// given the tweet texts.
    ///
    /// Returns `None` without a network call when there is nothing to
    /// analyze, and `None` on any call failure. Never errors.
    pub async fn analyze_tweets(&self, tweets: &[String], subject: &str) -> Option<String> {
        if tweets.is_empty() {
            debug!(subject, "no tweets to analyze");
            return None;
        }

        match self.try_analyze(tweets, subject).await {
            Ok(insights) => Some(insights),
            Err(e) => {
                warn!(subject, error = %e, "sentiment analysis failed");
                None
            }
        }
    }

    async fn try_analyze(&self, tweets: &[String], subject: &str) -> Result<String> {
        info!(subject, count = tweets.len(), "analyzing tweets");

        let request = AnalysisRequest {
            tweets,
            prompt: format!("Analyze the sentiment of these tweets about {}", subject),
        };

        let response = self
            .http
            .post(&self.config.analysis_url)
            .header("x-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("failed to reach the analysis API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("analysis API error ({}): {}", status, body);
        }

        let parsed: AnalysisResponse = response
            .json()
            .await
            .context("failed to parse the analysis response")?;

        debug!(subject, "analysis completed");

        Ok(parsed
            .analysis
            .unwrap_or_else(|| ANALYSIS_PLACEHOLDER.to_string()))
    }
}
