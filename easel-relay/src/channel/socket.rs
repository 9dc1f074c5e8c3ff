use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use easel_core::protocol::WorkerMessage;
use futures::{SinkExt, StreamExt};

use crate::service::job_service;
use crate::state::AppState;

/// Upgrades an incoming connection and makes it the current worker
pub async fn worker_socket(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drives one worker connection until it closes.
///
/// Outbound frames are queued through the registry and forwarded by a
/// sender task; inbound text frames are decoded and routed to the job
/// service. In-flight jobs are left to their timeout when the socket drops.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "Worker connected");

    let mut rx = state.worker.set(conn_id.clone());
    let (mut sink, mut stream) = socket.split();

    match WorkerMessage::Connected.to_json() {
        Ok(ack) => {
            if let Err(e) = sink.send(Message::Text(ack.into())).await {
                tracing::warn!(conn_id = %conn_id, error = %e, "Failed to acknowledge worker");
            }
        }
        Err(e) => tracing::error!(error = %e, "Failed to encode acknowledgment"),
    }

    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let closing = matches!(msg, Message::Close(_));
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "Worker sink closed");
                break;
            }
            if closing {
                break;
            }
        }
    });

    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Text(text)) => match WorkerMessage::from_json(text.as_str()) {
                Ok(message) => job_service::handle_worker_message(&state.jobs, message),
                Err(e) => {
                    tracing::warn!(
                        conn_id = %conn_id,
                        error = %e,
                        raw = %text.as_str(),
                        "Malformed worker message"
                    );
                }
            },
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "Worker receive error");
                break;
            }
        }
    }

    if state.worker.clear(&conn_id) {
        let pending = state.jobs.len();
        if pending > 0 {
            tracing::warn!(
                conn_id = %conn_id,
                pending,
                "Worker disconnected with jobs in flight; they will time out"
            );
        }
    }
    send_task.abort();
    tracing::info!(conn_id = %conn_id, "Worker disconnected");
}
