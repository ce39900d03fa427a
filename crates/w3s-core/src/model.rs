//! Sentiment analysis result types.
//!
//! These are the wire types shared by the MCP tool, the HTTP API and the
//! browser front end, so field names and sentiment labels are part of the
//! external contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Coarse sentiment classification for a technology.
///
/// Serialized as the user-facing label (emoji included) because the
/// front end and the formatted report display the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SentimentClass {
    #[serde(rename = "🚀 trending up")]
    TrendingUp,
    #[default]
    #[serde(rename = "💤 stable")]
    Neutral,
    #[serde(rename = "⚠️ declining")]
    TrendingDown,
}

impl fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentClass::TrendingUp => "🚀 trending up",
            SentimentClass::Neutral => "💤 stable",
            SentimentClass::TrendingDown => "⚠️ declining",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of one sentiment analysis run for one technology.
///
/// Invariants:
/// - `alternatives` is `Some` if and only if `sentiment` is `TrendingDown`.
/// - `insights` is `None` whenever `tweet_count` is zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSentimentResult {
    /// The technology name as supplied by the caller (not normalized).
    pub tool: String,
    pub sentiment: SentimentClass,
    pub tweet_count: usize,
    /// Free-text narrative from the analysis service, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    /// Suggested replacements, populated only for declining technologies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
    /// Best-effort category label, "Others" when unrecognized.
    pub category: String,
}

impl ToolSentimentResult {
    /// The degraded zero-count result: neutral sentiment, no insights,
    /// no alternatives, best-effort category only.
    pub fn neutral(tool: impl Into<String>) -> Self {
        let tool = tool.into();
        let category = catalog::categorize(&tool).to_string();
        Self {
            tool,
            sentiment: SentimentClass::Neutral,
            tweet_count: 0,
            insights: None,
            alternatives: None,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_serializes_as_label() {
        let json = serde_json::to_string(&SentimentClass::TrendingDown).unwrap();
        assert_eq!(json, "\"⚠️ declining\"");
        let back: SentimentClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SentimentClass::TrendingDown);
    }

    #[test]
    fn neutral_result_has_no_optional_fields() {
        let result = ToolSentimentResult::neutral("UnknownXYZ");
        assert_eq!(result.tool, "UnknownXYZ");
        assert_eq!(result.sentiment, SentimentClass::Neutral);
        assert_eq!(result.tweet_count, 0);
        assert_eq!(result.category, "Others");
        assert!(result.insights.is_none());
        assert!(result.alternatives.is_none());
    }

    #[test]
    fn absent_options_are_omitted_from_json() {
        let value = serde_json::to_value(ToolSentimentResult::neutral("Uniswap")).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["tool"], "Uniswap");
        assert_eq!(object["tweetCount"], 0);
        assert_eq!(object["category"], "DeFi");
        assert!(!object.contains_key("insights"));
        assert!(!object.contains_key("alternatives"));
    }
}
