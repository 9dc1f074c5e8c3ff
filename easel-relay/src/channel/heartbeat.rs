use std::sync::Arc;
use std::time::Duration;

use crate::channel::registry::WorkerRegistry;

/// Pings the current worker every `interval` so idle connections stay open
pub fn start_heartbeat(
    registry: Arc<WorkerRegistry>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            tracing::trace!("Pinging worker");
            registry.ping();
        }
    })
}
