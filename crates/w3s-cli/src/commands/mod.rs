//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod mcp;
pub mod serve;

/// Web3 Sentiment Analyzer - Public Perception from Twitter
#[derive(Parser)]
#[command(name = "w3s")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a comma-separated list of Web3 technologies
    Analyze(analyze::AnalyzeArgs),

    /// Start the web server backing the browser UI
    Serve(serve::ServeArgs),

    /// MCP server commands
    #[command(subcommand)]
    Mcp(mcp::McpCommands),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => analyze::execute(args).await,
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Mcp(cmd) => mcp::execute(cmd).await,
        }
    }
}
