use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sentinel-backend")]
#[command(about = "Campus Sentinel Dashboard Backend", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Import users from a campus CSV export into the local user store
    ImportUsers {
        /// Path to the CSV file
        csv: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("SENTINEL_CONFIG", config);
    }

    match args.command {
        Some(Command::ImportUsers { csv }) => backend_bootstrap::run_import(&csv).await,
        Some(Command::Serve) | None => backend_bootstrap::run_standalone().await,
    }
}
