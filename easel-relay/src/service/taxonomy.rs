//! Taxonomy Service
//!
//! Read-only view of the mockup template tree:
//! `<root>/<category>/<subcategory>/<layout>.{psd,png}`.
//! Nothing is cached; every call reads the directory afresh.

use easel_core::domain::job::{context_path, preview_path};
use easel_core::domain::layout::Layout;
use easel_core::domain::taxonomy::{Category, is_safe_segment};
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// Service error type
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Cannot access mockups folder: {0}")]
    PathUnavailable(std::io::Error),

    #[error("Invalid layout")]
    InvalidLayout,

    #[error("Invalid category or subcategory")]
    InvalidSegment,

    #[error("Image not found")]
    ImageNotFound,

    #[error("Failed to read image: {0}")]
    Io(std::io::Error),
}

/// List categories and their subcategories under `root`
///
/// Only directories count; loose files at either level are ignored. A
/// category whose own listing fails is kept with no subcategories.
///
/// # Arguments
/// * `root` - The mockups root directory
///
/// # Returns
/// Categories sorted by name, or `PathUnavailable` if `root` can't be read
pub async fn list_categories(root: &Path) -> Result<Vec<Category>, TaxonomyError> {
    let names = list_subdirectories(root)
        .await
        .map_err(TaxonomyError::PathUnavailable)?;

    let mut categories = Vec::with_capacity(names.len());
    for name in names {
        let subcategories = match list_subdirectories(&root.join(&name)).await {
            Ok(subcategories) => subcategories,
            Err(e) => {
                tracing::warn!("Error reading category {}: {}", name, e);
                Vec::new()
            }
        };
        categories.push(Category {
            name,
            subcategories,
        });
    }

    Ok(categories)
}

/// Read the preview image of a `(category, subcategory, layout)` triple
///
/// # Arguments
/// * `root` - The mockups root directory
/// * `category` - Category directory name
/// * `subcategory` - Subcategory directory name
/// * `layout` - Raw layout from the URL, validated here
///
/// # Returns
/// The bytes of `<root>/<category>/<subcategory>/<layout>.png`
pub async fn read_preview(
    root: &Path,
    category: &str,
    subcategory: &str,
    layout: &str,
) -> Result<Vec<u8>, TaxonomyError> {
    let layout = layout
        .parse::<Layout>()
        .map_err(|_| TaxonomyError::InvalidLayout)?;

    if !is_safe_segment(category) || !is_safe_segment(subcategory) {
        return Err(TaxonomyError::InvalidSegment);
    }

    let path = preview_path(root, category, subcategory, layout);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(TaxonomyError::ImageNotFound),
        Err(e) => Err(TaxonomyError::Io(e)),
    }
}

/// Trimmed content of the subcategory's `context.txt`, if there is one
pub async fn read_mockup_context(root: &Path, category: &str, subcategory: &str) -> Option<String> {
    let path = context_path(root, category, subcategory);
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => {
            let content = content.trim();
            (!content.is_empty()).then(|| content.to_string())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            None
        }
    }
}

/// Names of the immediate subdirectories of `dir`, sorted
async fn list_subdirectories(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    names.sort();
    Ok(names)
}
