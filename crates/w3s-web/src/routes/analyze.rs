//! Sentiment analysis route handler.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use w3s_core::ToolSentimentResult;
use w3s_masa::analyze_web3_sentiment;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub tool: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Analyze one technology and return the raw result as JSON.
///
/// A missing or blank `tool` field is a caller error (400). Analysis
/// failures do not surface here: the pipeline degrades them to a neutral
/// result, so a well-formed request always gets a 200.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ToolSentimentResult>, (StatusCode, Json<ErrorBody>)> {
    let tool = req.tool.as_deref().map(str::trim).unwrap_or("");
    if tool.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "Tool name is required".to_string(),
            }),
        ));
    }

    let result = analyze_web3_sentiment(&state.client, tool).await;
    Ok(Json(result))
}
