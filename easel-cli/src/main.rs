//! Easel CLI
//!
//! Command-line interface for the mockup relay.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "easel")]
#[command(about = "Easel mockup relay CLI", long_about = None)]
struct Cli {
    /// Relay URL
    #[arg(long, env = "EASEL_RELAY_URL", default_value = "http://localhost:3001")]
    relay_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        relay_url: cli.relay_url,
    };

    handle_command(cli.command, &config).await
}
