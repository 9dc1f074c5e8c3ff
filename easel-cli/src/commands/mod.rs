//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;
mod mockup;
mod status;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Config;
use easel_client::RelayClient;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show relay health and worker status
    Health,
    /// List template categories and subcategories
    Categories,
    /// Submit a mockup job and wait for the result
    Submit {
        /// Public URL of the customer image
        #[arg(long)]
        image_url: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        subcategory: String,
        /// portrait, landscape or square
        #[arg(long)]
        layout: String,
    },
    /// Download the preview image of a template
    Preview {
        category: String,
        subcategory: String,
        layout: String,
        /// Output file (defaults to <layout>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Upload a rendered mockup
    Upload {
        file: PathBuf,
        /// Name to store it under (defaults to the file name)
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete an uploaded mockup
    Delete { filename: String },
}

/// Routes the command to the appropriate handler
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = RelayClient::new(&config.relay_url);

    match command {
        Commands::Health => status::show_health(&client).await,
        Commands::Categories => mockup::list_categories(&client).await,
        Commands::Submit {
            image_url,
            category,
            subcategory,
            layout,
        } => job::submit_job(&client, image_url, category, subcategory, layout).await,
        Commands::Preview {
            category,
            subcategory,
            layout,
            output,
        } => mockup::download_preview(&client, &category, &subcategory, &layout, output).await,
        Commands::Upload { file, name } => mockup::upload(&client, &file, name).await,
        Commands::Delete { filename } => mockup::delete(&client, &filename).await,
    }
}
