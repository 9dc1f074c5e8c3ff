//! Easel Relay
//!
//! Local bridge between the browser extension and the mockup worker.
//!
//! Architecture:
//! - API: HTTP endpoints used by the extension and the worker's uploads
//! - Channel: the WebSocket the single worker connects to
//! - Services: job dispatch and correlation, taxonomy, uploads
//! - Repositories: the in-memory job table and the uploads directory
//!
//! The HTTP API and the worker channel listen on separate addresses and
//! share one [`AppState`].

pub mod api;
pub mod channel;
pub mod config;
pub mod repository;
pub mod service;
pub mod state;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

pub use config::Config;
pub use state::AppState;

/// Bind both listeners from `config` and serve until either server stops
pub async fn run(config: Config) -> Result<()> {
    let http_listener = TcpListener::bind(&config.http_addr)
        .await
        .with_context(|| format!("Failed to bind HTTP address {}", config.http_addr))?;
    let worker_listener = TcpListener::bind(&config.worker_addr)
        .await
        .with_context(|| format!("Failed to bind worker address {}", config.worker_addr))?;

    serve(AppState::new(config), http_listener, worker_listener).await
}

/// Serve the HTTP API and the worker channel on already-bound listeners
pub async fn serve(
    state: AppState,
    http_listener: TcpListener,
    worker_listener: TcpListener,
) -> Result<()> {
    let heartbeat =
        channel::start_heartbeat(state.worker.clone(), state.config.heartbeat_interval);

    let app = api::create_router(state.clone());
    let worker_app = channel::create_router(state);

    let result = tokio::try_join!(
        async {
            axum::serve(http_listener, app)
                .await
                .context("HTTP server failed")
        },
        async {
            axum::serve(worker_listener, worker_app)
                .await
                .context("Worker channel server failed")
        },
    );

    heartbeat.abort();
    result.map(|_| ())
}
