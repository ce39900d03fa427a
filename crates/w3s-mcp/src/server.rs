//! MCP server implementation.
//!
//! Line-framed JSON-RPC over stdio: one request per stdin line, one
//! response per stdout line. Tracing goes to stderr so stdout stays pure
//! protocol.

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use w3s_core::{report, W3sResult};
use w3s_masa::{sentiment, MasaClient};

/// Text returned when the caller supplies no usable technology names.
/// A prompt for input, not an error.
const EMPTY_INPUT_MESSAGE: &str = "Please provide at least one Web3 technology for analysis.";

/// JSON-RPC request structure.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

/// Tool definition.
#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    description: String,
    #[serde(rename = "inputSchema")]
    input_schema: serde_json::Value,
}

/// Run the MCP server over stdio.
pub async fn run_stdio(client: Arc<MasaClient>) -> W3sResult<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let response = JsonRpcResponse {
                    jsonrpc: "2.0".to_string(),
                    id: None,
                    result: None,
                    error: Some(JsonRpcError {
                        code: -32700,
                        message: format!("Parse error: {}", e),
                    }),
                };
                writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                stdout.flush()?;
                continue;
            }
        };

        // Notifications expect no response.
        if request.method.starts_with("notifications/") {
            continue;
        }

        let response = handle_request(&client, request).await;
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }

    Ok(())
}

async fn handle_request(client: &MasaClient, request: JsonRpcRequest) -> JsonRpcResponse {
    let result = match request.method.as_str() {
        "initialize" => handle_initialize(),
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(client, request.params).await,
        _ => Err(JsonRpcError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
        }),
    };

    match result {
        Ok(r) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(r),
            error: None,
        },
        Err(e) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    Ok(serde_json::json!({
        "protocolVersion": "2024-11-05",
        "serverInfo": {
            "name": "web3-sentiment-analyzer",
            "version": env!("CARGO_PKG_VERSION")
        },
        "capabilities": {
            "tools": {}
        }
    }))
}

fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![Tool {
        name: "analyze-web3-tech".to_string(),
        description: "Analyze public perception of Web3 technologies based on Twitter sentiment"
            .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "tools": {
                    "type": "string",
                    "description": "Comma-separated list of Web3 technologies to analyze (e.g., 'Ethereum, Solana, MetaMask')"
                }
            },
            "required": ["tools"]
        }),
    }];

    Ok(serde_json::json!({ "tools": tools }))
}

async fn handle_tool_call(
    client: &MasaClient,
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    let params = params.ok_or_else(|| JsonRpcError {
        code: -32602,
        message: "Missing params".to_string(),
    })?;

    let name = params["name"].as_str().ok_or_else(|| JsonRpcError {
        code: -32602,
        message: "Missing tool name".to_string(),
    })?;

    if name != "analyze-web3-tech" {
        return Err(JsonRpcError {
            code: -32601,
            message: format!("Unknown tool: {}", name),
        });
    }

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    let tools = args["tools"].as_str().ok_or_else(|| JsonRpcError {
        code: -32602,
        message: "Missing tools".to_string(),
    })?;

    let text = run_analysis(client, tools).await;

    Ok(serde_json::json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    }))
}

/// Run the pipeline over a comma-separated technology list and render the
/// report. Infallible: empty input yields the prompt-for-input message,
/// and every per-technology failure already degrades inside the pipeline.
async fn run_analysis(client: &MasaClient, tools: &str) -> String {
    info!(tools, "analyzing public perception for Web3 technologies");

    let tool_list = sentiment::parse_tool_list(tools);
    if tool_list.is_empty() {
        return EMPTY_INPUT_MESSAGE.to_string();
    }

    let results = sentiment::analyze_tool_list(client, &tool_list).await;
    report::format_results(&results)
}
