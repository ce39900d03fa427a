//! W3S CLI - Web3 Sentiment Analyzer
//!
//! Analyzes public perception of Web3 technologies from recent tweets,
//! exposed as a one-shot command, an HTTP server and an MCP server.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{Cli, Commands};

/// Initialize tracing with optional file logging.
///
/// When `mcp_mode` is true, all tracing output goes to stderr with ANSI
/// disabled to prevent corrupting the JSON-RPC protocol on stdout.
fn init_tracing(log_file: Option<&std::path::Path>, mcp_mode: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "w3s=info,w3s_masa=info,w3s_web=debug,w3s_mcp=debug".into());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("Failed to open log file");

        // Log to both stderr and file when --log is used
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else if mcp_mode {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) if args.log => Some(
            args.log_file
                .clone()
                .unwrap_or_else(|| std::path::PathBuf::from("w3s.log")),
        ),
        _ => None,
    };

    let mcp_mode = matches!(&cli.command, Commands::Mcp(_));
    init_tracing(log_file.as_deref(), mcp_mode);

    cli.execute().await
}
