//! Web server command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use w3s_masa::{MasaClient, MasaConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory holding the static front-end assets
    #[arg(long, default_value = "app")]
    pub app_dir: PathBuf,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to w3s.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = MasaConfig::from_env()?;
    let client = Arc::new(MasaClient::new(config));

    eprintln!(
        "  {} {} {}",
        "●".green().bold(),
        "W3S".cyan().bold(),
        format!("web server on http://127.0.0.1:{}", args.port).bold()
    );
    eprintln!("  {} POST /api/analyze", "▸".dimmed());
    eprintln!("  {} Ctrl+C to stop", "▸".dimmed());
    eprintln!();

    w3s_web::run_server(client, &args.app_dir, args.port).await
}
