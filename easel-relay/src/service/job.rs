//! Job Service
//!
//! Submission of mockup jobs to the worker and correlation of the worker's
//! replies back to the waiting requests.

use easel_core::domain::job::Job;
use easel_core::domain::layout::Layout;
use easel_core::domain::taxonomy::is_safe_segment;
use easel_core::dto::job::{SubmitJob, SubmitJobResponse};
use easel_core::protocol::WorkerMessage;
use thiserror::Error;

use crate::repository::{JobOutcome, JobTable};
use crate::service::taxonomy_service;
use crate::state::AppState;

/// Service error type
///
/// The `Display` text is what the caller sees in the `error` field.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Worker not connected")]
    WorkerUnavailable,

    #[error("Job timeout")]
    Timeout,

    /// Message reported by the worker, passed through verbatim
    #[error("{0}")]
    WorkerFailure(String),

    #[error(transparent)]
    Duplicate(#[from] crate::repository::job_table::DuplicateJob),
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
struct ValidSubmission {
    image_url: String,
    category: String,
    subcategory: String,
    layout: Layout,
}

/// Dispatch a job to the worker and wait for its outcome
///
/// Validation and worker availability are checked before anything is
/// created. Once dispatched, the job resolves through its table entry:
/// completion, failure or the configured timeout, whichever comes first.
///
/// # Arguments
/// * `state` - Shared relay state (config, worker registry, job table)
/// * `req` - The submission as received
///
/// # Returns
/// The worker's result URL plus the subcategory's mockup context, if any
pub async fn submit_job(
    state: &AppState,
    req: SubmitJob,
) -> Result<SubmitJobResponse, JobError> {
    let submission = validate_submission(req)?;

    if !state.worker.is_connected() {
        tracing::warn!("Rejecting job: worker not connected");
        return Err(JobError::WorkerUnavailable);
    }

    let job = Job::new(
        &state.config.mockups_path,
        submission.image_url,
        submission.category,
        submission.subcategory,
        submission.layout,
    );
    let pending = state.jobs.register(&job.id)?;

    let job_id = job.id.clone();
    let category = job.category.clone();
    let subcategory = job.subcategory.clone();

    if let Err(e) = state.worker.send(&WorkerMessage::NewJob { job }) {
        tracing::warn!("Failed to dispatch job {}: {}", job_id, e);
        drop(pending);
        return Err(JobError::WorkerUnavailable);
    }

    tracing::info!(
        "Job {} dispatched ({}/{}), waiting up to {:?}",
        job_id,
        category,
        subcategory,
        state.config.job_timeout
    );

    match pending.wait(state.config.job_timeout).await {
        JobOutcome::Completed { result_path } => {
            tracing::info!("Job {} completed: {}", job_id, result_path);
            let mockup_context = taxonomy_service::read_mockup_context(
                &state.config.mockups_path,
                &category,
                &subcategory,
            )
            .await;

            Ok(SubmitJobResponse {
                success: true,
                job_id,
                result_path,
                mockup_context,
            })
        }
        JobOutcome::Failed { error } => {
            tracing::warn!("Job {} failed: {}", job_id, error);
            Err(JobError::WorkerFailure(error))
        }
        JobOutcome::TimedOut => {
            tracing::warn!("Job {} timed out", job_id);
            Err(JobError::Timeout)
        }
    }
}

/// Route a message received from the worker
///
/// Replies for ids no longer pending (timed out, already resolved, unknown)
/// are logged and dropped.
pub fn handle_worker_message(jobs: &JobTable, message: WorkerMessage) {
    let (job_id, outcome) = match message {
        WorkerMessage::JobCompleted {
            job_id,
            result_path,
        } => (job_id, JobOutcome::Completed { result_path }),
        WorkerMessage::JobFailed { job_id, error } => (job_id, JobOutcome::Failed { error }),
        other => {
            tracing::warn!("Unexpected {} message from worker", other.kind());
            return;
        }
    };

    if !jobs.resolve(&job_id, outcome) {
        tracing::warn!("Received reply for job {} which is no longer pending", job_id);
    }
}

// =============================================================================
// Validation
// =============================================================================

fn validate_submission(req: SubmitJob) -> Result<ValidSubmission, JobError> {
    let (Some(image_url), Some(category), Some(subcategory), Some(layout)) = (
        non_empty(req.image_url),
        non_empty(req.category),
        non_empty(req.subcategory),
        non_empty(req.layout),
    ) else {
        return Err(JobError::ValidationError(
            "Missing required fields: imageUrl, category, subcategory, layout".to_string(),
        ));
    };

    let layout = layout
        .parse::<Layout>()
        .map_err(|e| JobError::ValidationError(e.to_string()))?;

    if !is_safe_segment(&category) || !is_safe_segment(&subcategory) {
        return Err(JobError::ValidationError(
            "Invalid category or subcategory".to_string(),
        ));
    }

    Ok(ValidSubmission {
        image_url,
        category,
        subcategory,
        layout,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
