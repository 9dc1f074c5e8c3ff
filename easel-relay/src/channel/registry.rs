//! Worker registry
//!
//! Holds the one connection currently treated as "the worker". A new
//! connection supersedes the previous one, which is sent a Close frame.

use axum::body::Bytes;
use axum::extract::ws::Message;
use chrono::{DateTime, Utc};
use easel_core::protocol::WorkerMessage;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::mpsc;

/// Channel sender half for pushing frames to the worker socket.
pub type WorkerSender = mpsc::UnboundedSender<Message>;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Worker not connected")]
    NotConnected,

    #[error("Worker connection is closed")]
    Closed,

    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

struct WorkerConnection {
    id: String,
    sender: WorkerSender,
    connected_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct WorkerRegistry {
    current: Mutex<Option<WorkerConnection>>,
}

impl WorkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `conn_id` the current worker
    ///
    /// Returns the receiver the socket task forwards to the WebSocket sink.
    pub fn set(&self, conn_id: String) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let previous = self.current.lock().replace(WorkerConnection {
            id: conn_id,
            sender: tx,
            connected_at: Utc::now(),
        });

        if let Some(old) = previous {
            tracing::warn!(conn_id = %old.id, "Worker superseded by a new connection, closing it");
            let _ = old.sender.send(Message::Close(None));
        }

        rx
    }

    /// Clears the registry if it still holds `conn_id`
    pub fn clear(&self, conn_id: &str) -> bool {
        let mut current = self.current.lock();
        match current.as_ref() {
            Some(conn) if conn.id == conn_id => {
                *current = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a worker is held and its channel is still open
    pub fn is_connected(&self) -> bool {
        self.current
            .lock()
            .as_ref()
            .is_some_and(|conn| !conn.sender.is_closed())
    }

    /// When the current worker connected, if one is held
    pub fn connected_since(&self) -> Option<DateTime<Utc>> {
        self.current.lock().as_ref().map(|conn| conn.connected_at)
    }

    /// Serializes `message` and queues it for the current worker
    pub fn send(&self, message: &WorkerMessage) -> Result<(), ChannelError> {
        let text = message.to_json()?;

        let current = self.current.lock();
        let conn = current.as_ref().ok_or(ChannelError::NotConnected)?;
        conn.sender
            .send(Message::Text(text.into()))
            .map_err(|_| ChannelError::Closed)?;

        tracing::debug!(conn_id = %conn.id, "Sent {} to worker", message.kind());
        Ok(())
    }

    /// Queues a Ping frame for the current worker, if any
    pub fn ping(&self) {
        if let Some(conn) = self.current.lock().as_ref() {
            let _ = conn.sender.send(Message::Ping(Bytes::new()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(msg: Message) -> String {
        match msg {
            Message::Text(text) => text.as_str().to_string(),
            other => panic!("expected text frame, got {:?}", other),
        }
    }

    #[test]
    fn test_send_without_worker_fails() {
        let registry = WorkerRegistry::new();
        assert!(!registry.is_connected());
        assert!(matches!(
            registry.send(&WorkerMessage::Connected),
            Err(ChannelError::NotConnected)
        ));
    }

    #[test]
    fn test_send_reaches_current_worker() {
        let registry = WorkerRegistry::new();
        let mut rx = registry.set("conn-1".to_string());
        assert!(registry.is_connected());

        registry.send(&WorkerMessage::Connected).unwrap();

        let frame = text_of(rx.try_recv().unwrap());
        assert_eq!(frame, r#"{"type":"connected"}"#);
    }

    #[test]
    fn test_closed_receiver_is_not_connected() {
        let registry = WorkerRegistry::new();
        let rx = registry.set("conn-1".to_string());
        drop(rx);

        assert!(!registry.is_connected());
        assert!(matches!(
            registry.send(&WorkerMessage::Connected),
            Err(ChannelError::Closed)
        ));
    }

    #[test]
    fn test_new_connection_supersedes_and_closes_old() {
        let registry = WorkerRegistry::new();
        let mut old_rx = registry.set("conn-1".to_string());
        let mut new_rx = registry.set("conn-2".to_string());

        assert!(matches!(old_rx.try_recv(), Ok(Message::Close(None))));

        registry.send(&WorkerMessage::Connected).unwrap();
        assert!(new_rx.try_recv().is_ok());
        assert!(registry.connected_since().is_some());
    }

    #[test]
    fn test_clear_ignores_superseded_connection() {
        let registry = WorkerRegistry::new();
        let _old_rx = registry.set("conn-1".to_string());
        let _new_rx = registry.set("conn-2".to_string());

        assert!(!registry.clear("conn-1"));
        assert!(registry.is_connected());

        assert!(registry.clear("conn-2"));
        assert!(!registry.is_connected());
        assert!(registry.connected_since().is_none());
    }
}
