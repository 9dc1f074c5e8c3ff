//! Health DTOs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub mockups_path: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub worker_connected: bool,
    /// When the current worker connected; absent while none is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_connected_at: Option<chrono::DateTime<chrono::Utc>>,
    pub pending_jobs: usize,
}
