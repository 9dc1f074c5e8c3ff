//! Easel Worker
//!
//! Long-running process that receives mockup jobs from the relay over a
//! WebSocket, renders them with the configured compositor and uploads the
//! result back to the relay.
//!
//! Architecture:
//! - Configuration: environment variables with defaults
//! - Services: job execution and compositing (trait-based)
//! - Connection: WebSocket session and reconnect loop

mod config;
mod connection;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::service::{CommandCompositor, ExecutionService, StandardExecutionService};
use easel_client::RelayClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "easel_worker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Easel Worker");

    let config = Config::from_env()?;
    config.validate()?;
    info!(
        "Loaded configuration: worker_url={}, relay_url={}, compositor={}",
        config.worker_url, config.relay_url, config.compositor_program
    );

    tokio::fs::create_dir_all(&config.work_dir)
        .await
        .with_context(|| format!("Failed to create work dir {}", config.work_dir.display()))?;

    let compositor = Arc::new(CommandCompositor::new(
        config.compositor_program.clone(),
        config.compositor_args.clone(),
    ));
    let executor: Arc<dyn ExecutionService> = Arc::new(StandardExecutionService::new(
        RelayClient::new(config.relay_url.clone()),
        compositor,
        config.work_dir.clone(),
    ));

    tokio::select! {
        result = connection::run(&config, executor) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
            Ok(())
        }
    }
}
