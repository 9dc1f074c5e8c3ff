//! Service Module
//!
//! Business logic layer for the relay.
//! Services sit between the HTTP/worker-channel handlers and the repositories.

pub mod job;
pub mod taxonomy;
pub mod upload;

// Re-export for convenience
pub use job as job_service;
pub use taxonomy as taxonomy_service;
pub use upload as upload_service;
