//! Worker channel
//!
//! The persistent WebSocket between the relay and its single worker. The
//! relay accepts connections on a dedicated address; the most recent one is
//! the worker jobs are dispatched to.

mod heartbeat;
pub mod registry;
mod socket;

use axum::{Router, routing::get};

use crate::state::AppState;

pub use heartbeat::start_heartbeat;
pub use registry::{ChannelError, WorkerRegistry};
pub use socket::worker_socket;

/// Router served on the worker address
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(worker_socket))
        .with_state(state)
}
