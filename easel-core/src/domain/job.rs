//! Job domain types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::layout::Layout;

/// File extension of the layered mockup templates
pub const TEMPLATE_EXTENSION: &str = "psd";

/// File extension of the template preview images
pub const PREVIEW_EXTENSION: &str = "png";

/// Optional per-subcategory description returned alongside a finished mockup
pub const CONTEXT_FILE_NAME: &str = "context.txt";

/// A mockup job as dispatched to the worker
///
/// Field names follow the worker channel wire format (camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub image_url: String,
    pub mockup_path: String,
    pub category: String,
    pub subcategory: String,
    pub layout: Layout,
}

impl Job {
    /// Builds a job with a fresh id and its template path under `root`
    pub fn new(
        root: &Path,
        image_url: String,
        category: String,
        subcategory: String,
        layout: Layout,
    ) -> Self {
        let mockup_path = template_path(root, &category, &subcategory, layout);
        Self {
            id: generate_job_id(),
            image_url,
            mockup_path: mockup_path.to_string_lossy().into_owned(),
            category,
            subcategory,
            layout,
        }
    }

    /// Name under which the worker uploads the rendered mockup
    pub fn result_file_name(&self) -> String {
        format!("processed_{}.jpg", self.id)
    }
}

/// Generates a job id: `job_<unix millis>_<random suffix>`
pub fn generate_job_id() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "job_{}_{}",
        chrono::Utc::now().timestamp_millis(),
        &suffix[..9]
    )
}

/// `<root>/<category>/<subcategory>/<layout>.psd`
pub fn template_path(root: &Path, category: &str, subcategory: &str, layout: Layout) -> PathBuf {
    layout_file(root, category, subcategory, layout, TEMPLATE_EXTENSION)
}

/// `<root>/<category>/<subcategory>/<layout>.png`
pub fn preview_path(root: &Path, category: &str, subcategory: &str, layout: Layout) -> PathBuf {
    layout_file(root, category, subcategory, layout, PREVIEW_EXTENSION)
}

/// `<root>/<category>/<subcategory>/context.txt`
pub fn context_path(root: &Path, category: &str, subcategory: &str) -> PathBuf {
    root.join(category).join(subcategory).join(CONTEXT_FILE_NAME)
}

fn layout_file(
    root: &Path,
    category: &str,
    subcategory: &str,
    layout: Layout,
    extension: &str,
) -> PathBuf {
    root.join(category)
        .join(subcategory)
        .join(format!("{}.{}", layout.as_str(), extension))
}
