//! Worker channel protocol
//!
//! JSON messages exchanged between the relay and the worker over the
//! WebSocket. Every message carries a `type` discriminator.

use serde::{Deserialize, Serialize};

use crate::domain::job::Job;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkerMessage {
    /// relay -> worker: connection acknowledged
    Connected,

    /// relay -> worker: render this job
    NewJob { job: Job },

    /// worker -> relay: job rendered and uploaded
    JobCompleted {
        #[serde(rename = "jobId")]
        job_id: String,
        #[serde(rename = "resultPath")]
        result_path: String,
    },

    /// worker -> relay: job could not be rendered
    JobFailed {
        #[serde(rename = "jobId")]
        job_id: String,
        error: String,
    },
}

impl WorkerMessage {
    /// Wire name of the message kind
    pub fn kind(&self) -> &'static str {
        match self {
            WorkerMessage::Connected => "connected",
            WorkerMessage::NewJob { .. } => "new_job",
            WorkerMessage::JobCompleted { .. } => "job_completed",
            WorkerMessage::JobFailed { .. } => "job_failed",
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
