//! Taxonomy and result file DTOs

use serde::{Deserialize, Serialize};

use crate::domain::taxonomy::Category;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

/// Result of storing an uploaded mockup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub file_name: String,
    /// Publicly fetchable URL of the stored file
    pub file_path: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
