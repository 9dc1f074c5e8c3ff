//! Mockup taxonomy types

use serde::{Deserialize, Serialize};

/// A template category and the names of its subcategories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub subcategories: Vec<String>,
}

/// Whether `segment` can be joined onto a directory without escaping it
///
/// Rejects empty names, `.`/`..`, and anything containing a path separator.
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
        && !segment.contains('\0')
}
