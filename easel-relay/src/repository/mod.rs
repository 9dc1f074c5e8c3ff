//! Repository Module
//!
//! State access layer for the relay: the in-memory job table and the uploads
//! directory on disk.

pub mod job_table;
pub mod uploads;

// Re-export for convenience
pub use job_table::{JobOutcome, JobTable, PendingJob};
pub use uploads as upload_repository;
