//! Data Transfer Objects for the relay HTTP API
//!
//! Request and response bodies shared by the relay (which produces them) and
//! the client (which consumes them). Field names follow the JSON contract the
//! browser extension already speaks (camelCase, `success` flag).

pub mod health;
pub mod job;
pub mod mockup;

use serde::{Deserialize, Serialize};

/// Body of every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
