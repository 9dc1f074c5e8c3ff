use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use easel_relay::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "easel_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Easel Relay...");

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Serving mockups from: {}", config.mockups_path.display());
    tracing::info!("Storing uploads in: {}", config.uploads_dir.display());
    tracing::info!("HTTP API listening on {}", config.http_addr);
    tracing::info!("Worker channel listening on ws://{}", config.worker_addr);

    tokio::select! {
        result = easel_relay::run(config) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
            Ok(())
        }
    }
}
