//! MCP server commands.

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use w3s_masa::{MasaClient, MasaConfig};

#[derive(Subcommand)]
pub enum McpCommands {
    /// Run MCP server over stdio
    Stdio,
}

pub async fn execute(cmd: McpCommands) -> Result<()> {
    match cmd {
        McpCommands::Stdio => {
            eprintln!(
                "  {} {} {}",
                "●".green().bold(),
                "W3S MCP".cyan().bold(),
                "server running (stdio)".bold()
            );
            eprintln!("  {} 1 tool: analyze-web3-tech", "▸".dimmed());
            eprintln!("  {} Ctrl+C to stop", "▸".dimmed());
            eprintln!();

            let config = MasaConfig::from_env()?;
            let client = Arc::new(MasaClient::new(config));
            w3s_mcp::run_stdio(client).await?;
        }
    }

    Ok(())
}
