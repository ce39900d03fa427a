//! Tweet search with polling-based result retrieval.
//!
//! The search service is eventually consistent: a submission returns a
//! job id, and results become available some time later. The client polls
//! the results endpoint with a fixed delay and a bounded attempt count.
//! Three poll outcomes exist: results ready (non-empty array), job done
//! with nothing found (`{"status": "DONE"}`), or still running.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::client::MasaClient;

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct SearchSubmission {
    #[serde(default)]
    uuid: Option<String>,
}

/// One retrieved tweet. The service is inconsistent about the field name
/// for the body, so both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "Content")]
    pub content: Option<String>,
}

impl Tweet {
    /// The tweet body, preferring `text` over `Content`.
    pub fn body(&self) -> &str {
        self.text
            .as_deref()
            .or(self.content.as_deref())
            .unwrap_or("")
    }
}

/// The results endpoint answers with either the retrieved tweets or a
/// job-status object while the search is still in flight.
#[derive(Deserialize)]
#[serde(untagged)]
enum PollResponse {
    Tweets(Vec<Tweet>),
    Job { status: String },
}

impl MasaClient {
    /// Search recent tweets mentioning `query`.
    ///
    /// Never fails: submission errors, poll errors and exhausted retries
    /// all degrade to an empty result with a logged reason.
    pub async fn search_tweets(&self, query: &str) -> Vec<Tweet> {
        match self.try_search(query).await {
            Ok(tweets) => tweets,
            Err(e) => {
                warn!(query, error = %e, "tweet search failed, returning no results");
                Vec::new()
            }
        }
    }

    async fn try_search(&self, query: &str) -> Result<Vec<Tweet>> {
        debug!(query, "submitting tweet search");

        let response = self
            .http
            .post(&self.config.search_url)
            .header("x-api-key", &self.config.api_key)
            .json(&SearchRequest {
                query,
                max_results: self.config.max_results,
            })
            .send()
            .await
            .context("failed to reach the search API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("search API error ({}): {}", status, body);
        }

        let submission: SearchSubmission = response
            .json()
            .await
            .context("failed to parse the search submission response")?;

        let Some(uuid) = submission.uuid else {
            anyhow::bail!("search submission response carried no job uuid");
        };

        Ok(self.poll_results(&uuid).await)
    }

    /// Poll the results endpoint until the job terminates or attempts
    /// run out. Every attempt waits the fixed delay first, including the
    /// first one; a failed HTTP call still consumes an attempt.
    async fn poll_results(&self, uuid: &str) -> Vec<Tweet> {
        let url = format!("{}{}", self.config.results_url, uuid);

        for attempt in 1..=self.config.max_poll_attempts {
            tokio::time::sleep(self.config.poll_delay).await;

            let response = match self
                .http
                .get(&url)
                .header("x-api-key", &self.config.api_key)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    warn!(attempt, error = %e, "result poll failed");
                    continue;
                }
            };

            if !response.status().is_success() {
                warn!(attempt, status = %response.status(), "result poll returned an error status");
                continue;
            }

            match response.json::<PollResponse>().await {
                Ok(PollResponse::Tweets(tweets)) if !tweets.is_empty() => {
                    info!(count = tweets.len(), "search completed");
                    return tweets;
                }
                Ok(PollResponse::Job { status }) if status == "DONE" => {
                    info!("search completed, but no tweets found");
                    return Vec::new();
                }
                // An empty array or any other status means the job is
                // still running.
                Ok(_) => debug!(attempt, "search job still running"),
                Err(e) => warn!(attempt, error = %e, "unexpected result payload"),
            }
        }

        info!("no tweets found after all polling attempts");
        Vec::new()
    }
}
