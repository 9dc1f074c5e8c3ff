//! Layout domain type

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Template variant used to render a mockup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Portrait,
    Landscape,
    Square,
}

/// Returned when a string does not name a known layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid layout")]
pub struct InvalidLayout(pub String);

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Portrait, Layout::Landscape, Layout::Square];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Portrait => "portrait",
            Layout::Landscape => "landscape",
            Layout::Square => "square",
        }
    }
}

impl FromStr for Layout {
    type Err = InvalidLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Layout::Portrait),
            "landscape" => Ok(Layout::Landscape),
            "square" => Ok(Layout::Square),
            other => Err(InvalidLayout(other.to_string())),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_layouts() {
        for layout in Layout::ALL {
            assert_eq!(layout.as_str().parse::<Layout>(), Ok(layout));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Portrait".parse::<Layout>().is_err());
        assert!("".parse::<Layout>().is_err());
        assert_eq!(
            "panorama".parse::<Layout>().unwrap_err().to_string(),
            "Invalid layout"
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Layout::Landscape).unwrap();
        assert_eq!(json, "\"landscape\"");
        let parsed: Layout = serde_json::from_str("\"square\"").unwrap();
        assert_eq!(parsed, Layout::Square);
    }
}
