//! One-shot analysis command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use w3s_core::report;
use w3s_masa::{sentiment, MasaClient, MasaConfig};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Comma-separated list of Web3 technologies (e.g. "Ethereum, Solana, MetaMask")
    pub tools: String,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let tool_list = sentiment::parse_tool_list(&args.tools);
    if tool_list.is_empty() {
        println!("Please provide at least one Web3 technology for analysis.");
        return Ok(());
    }

    let config = MasaConfig::from_env()?;
    let client = MasaClient::new(config);

    eprintln!(
        "  {} Analyzing {} technologies (this can take a while, the search API is polled with a fixed delay)",
        "●".cyan().bold(),
        tool_list.len().min(sentiment::MAX_TOOLS_PER_REQUEST)
    );

    let results = sentiment::analyze_tool_list(&client, &tool_list).await;
    println!("{}", report::format_results(&results));

    Ok(())
}
