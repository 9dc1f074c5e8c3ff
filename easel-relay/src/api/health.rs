//! Health Check API Handler

use axum::{Json, extract::State};
use easel_core::dto::health::HealthResponse;

use crate::state::AppState;

/// GET /health
/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Easel mockup relay is running".to_string(),
        mockups_path: state.config.mockups_path.display().to_string(),
        timestamp: chrono::Utc::now(),
        worker_connected: state.worker.is_connected(),
        worker_connected_at: state.worker.connected_since(),
        pending_jobs: state.jobs.len(),
    })
}
