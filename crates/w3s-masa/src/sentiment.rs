//! Sentiment orchestration: search, analyze, classify.

use tracing::info;

use w3s_core::{catalog, SentimentClass, ToolSentimentResult};

use crate::client::MasaClient;

/// Upper bound on technologies analyzed per request; the rest are dropped.
pub const MAX_TOOLS_PER_REQUEST: usize = 5;

/// Run the full sentiment pipeline for one technology.
///
/// Total: every failure along the way degrades to a neutral zero-count
/// result carrying only the best-effort category. Finding no tweets is
/// the designed fast path for "nothing to analyze", not an error.
pub async fn analyze_web3_sentiment(client: &MasaClient, tool: &str) -> ToolSentimentResult {
    info!(tool, "starting sentiment analysis");

    let tweets = client.search_tweets(tool).await;
    if tweets.is_empty() {
        info!(tool, "no tweets to analyze, returning neutral result");
        return ToolSentimentResult::neutral(tool);
    }

    let texts: Vec<String> = tweets.iter().map(|t| t.body().to_string()).collect();
    let insights = client.analyze_tweets(&texts, tool).await;

    let (sentiment, alternatives) = classify(insights.as_deref(), tool);
    info!(tool, %sentiment, "final classification");

    ToolSentimentResult {
        tool: tool.to_string(),
        sentiment,
        tweet_count: tweets.len(),
        insights,
        alternatives,
        category: catalog::categorize(tool).to_string(),
    }
}

/// Derive the sentiment class from the narrative by case-insensitive
/// substring search. "positive" is checked before "negative", so a
/// narrative containing both classifies as trending up. The narrative is
/// free text from an external generator and is treated as weak lexical
/// evidence only.
fn classify(insights: Option<&str>, tool: &str) -> (SentimentClass, Option<Vec<String>>) {
    let Some(narrative) = insights else {
        return (SentimentClass::Neutral, None);
    };

    let lowered = narrative.to_lowercase();
    if lowered.contains("positive") {
        (SentimentClass::TrendingUp, None)
    } else if lowered.contains("negative") {
        (
            SentimentClass::TrendingDown,
            Some(catalog::alternatives_for(tool)),
        )
    } else {
        (SentimentClass::Neutral, None)
    }
}

/// Split a comma-separated technology list, trimming entries and dropping
/// empty ones.
pub fn parse_tool_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Analyze up to [`MAX_TOOLS_PER_REQUEST`] technologies sequentially, in
/// input order. Sequential on purpose: it bounds the outbound request
/// rate to the MASA services.
pub async fn analyze_tool_list(
    client: &MasaClient,
    tools: &[String],
) -> Vec<ToolSentimentResult> {
    let retained = &tools[..tools.len().min(MAX_TOOLS_PER_REQUEST)];
    if tools.len() > retained.len() {
        info!(
            requested = tools.len(),
            retained = retained.len(),
            "technology list truncated"
        );
    }

    let mut results = Vec::with_capacity(retained.len());
    for tool in retained {
        results.push(analyze_web3_sentiment(client, tool).await);
    }
    results
}
