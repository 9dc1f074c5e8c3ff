//! Job table
//!
//! In-memory correlation table between dispatched job ids and the HTTP
//! requests waiting on them. Each entry is a one-shot completion channel.
//! An entry is inserted once at submission and removed exactly once, by
//! whichever of completion, failure or timeout happens first.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::oneshot;

/// How a pending job ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Completed { result_path: String },
    Failed { error: String },
    TimedOut,
}

#[derive(Debug, Error)]
#[error("Job {0} is already pending")]
pub struct DuplicateJob(pub String);

/// Table of jobs waiting for a worker reply
#[derive(Clone, Default)]
pub struct JobTable {
    pending: Arc<Mutex<HashMap<String, oneshot::Sender<JobOutcome>>>>,
}

impl JobTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry for `job_id` and returns the handle to wait on
    pub fn register(&self, job_id: &str) -> Result<PendingJob, DuplicateJob> {
        let mut pending = self.pending.lock();
        if pending.contains_key(job_id) {
            return Err(DuplicateJob(job_id.to_string()));
        }

        let (tx, rx) = oneshot::channel();
        pending.insert(job_id.to_string(), tx);

        Ok(PendingJob {
            table: self.clone(),
            job_id: job_id.to_string(),
            rx,
        })
    }

    /// Removes the entry for `job_id` and hands it `outcome`
    ///
    /// Returns false when no entry exists (already timed out or resolved);
    /// the outcome is then dropped.
    pub fn resolve(&self, job_id: &str, outcome: JobOutcome) -> bool {
        let mut pending = self.pending.lock();
        match pending.remove(job_id) {
            Some(tx) => {
                // Sent under the lock so a waiter that finds the entry gone
                // always finds the outcome in its channel.
                if tx.send(outcome).is_err() {
                    tracing::debug!("Waiter for job {} is gone", job_id);
                }
                true
            }
            None => false,
        }
    }

    /// Removes the entry for `job_id` without resolving it
    pub fn remove(&self, job_id: &str) -> bool {
        self.pending.lock().remove(job_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

/// Handle held by the submitter while its job is pending
///
/// Dropping the handle removes the table entry, so a cancelled request
/// does not leave its id behind.
pub struct PendingJob {
    table: JobTable,
    job_id: String,
    rx: oneshot::Receiver<JobOutcome>,
}

impl PendingJob {
    /// Waits for the job to be resolved, or for `timeout` to elapse
    pub async fn wait(mut self, timeout: Duration) -> JobOutcome {
        match tokio::time::timeout(timeout, &mut self.rx).await {
            Ok(Ok(outcome)) => outcome,
            // The sender only goes away with its entry, which nothing but
            // this handle removes unresolved.
            Ok(Err(_)) => {
                tracing::debug!("Job {} sender dropped without an outcome", self.job_id);
                JobOutcome::TimedOut
            }
            Err(_) => {
                if self.table.remove(&self.job_id) {
                    return JobOutcome::TimedOut;
                }
                // Resolved between the deadline and the removal.
                self.rx.try_recv().unwrap_or(JobOutcome::TimedOut)
            }
        }
    }
}

impl Drop for PendingJob {
    fn drop(&mut self) {
        if self.table.remove(&self.job_id) {
            tracing::debug!("Pending job {} dropped before resolution", self.job_id);
        }
    }
}
