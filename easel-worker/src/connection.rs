//! Worker channel connection
//!
//! Connects to the relay's WebSocket, executes each `new_job` in arrival
//! order and answers with `job_completed` / `job_failed`. Reconnects with a
//! fixed delay; a successful connection resets the attempt counter.

use anyhow::Result;
use easel_core::domain::job::Job;
use easel_core::protocol::WorkerMessage;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::service::ExecutionService;

/// Run the connection loop until the reconnect budget is exhausted
pub async fn run(config: &Config, executor: Arc<dyn ExecutionService>) -> Result<()> {
    let mut attempts = 0;

    loop {
        info!(url = %config.worker_url, "Connecting to relay");

        match tokio_tungstenite::connect_async(config.worker_url.as_str()).await {
            Ok((socket, _response)) => {
                info!("Connected to relay");
                attempts = 0;
                run_session(socket, executor.as_ref()).await;
                warn!("Relay connection closed");
            }
            Err(e) => {
                error!(error = %e, "Failed to connect to relay");
            }
        }

        if attempts >= config.max_reconnect_attempts {
            anyhow::bail!(
                "Giving up after {} reconnect attempts",
                config.max_reconnect_attempts
            );
        }
        attempts += 1;

        info!(
            "Reconnecting in {:?} (attempt {}/{})",
            config.reconnect_delay, attempts, config.max_reconnect_attempts
        );
        tokio::time::sleep(config.reconnect_delay).await;
    }
}

/// Drive one connection until the relay closes it or the socket fails
async fn run_session<S>(socket: WebSocketStream<S>, executor: &dyn ExecutionService)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (mut sink, mut stream) = socket.split();

    while let Some(frame) = stream.next().await {
        let text = match frame {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(frame)) => {
                info!(?frame, "Relay closed the connection");
                break;
            }
            // Pings are answered by tungstenite.
            Ok(_) => continue,
            Err(e) => {
                error!(error = %e, "WebSocket receive error");
                break;
            }
        };

        let message = match WorkerMessage::from_json(&text) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, raw = %text, "Unknown or malformed message from relay");
                continue;
            }
        };

        let reply = match message {
            WorkerMessage::Connected => {
                info!("Relay acknowledged connection");
                continue;
            }
            WorkerMessage::NewJob { job } => process_job(executor, job).await,
            other => {
                warn!("Unexpected {} message from relay", other.kind());
                continue;
            }
        };

        let json = match reply.to_json() {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to encode reply");
                continue;
            }
        };

        if let Err(e) = sink.send(Message::Text(json)).await {
            error!(error = %e, "Failed to send {} to relay", reply.kind());
            break;
        }
        debug!("Sent {} to relay", reply.kind());
    }
}

async fn process_job(executor: &dyn ExecutionService, job: Job) -> WorkerMessage {
    info!("Received job {}", job.id);

    match executor.execute_job(&job).await {
        Ok(result_path) => WorkerMessage::JobCompleted {
            job_id: job.id,
            result_path,
        },
        Err(e) => WorkerMessage::JobFailed {
            job_id: job.id,
            error: e.to_string(),
        },
    }
}
