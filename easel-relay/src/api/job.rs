//! Job API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use easel_core::dto::job::{SubmitJob, SubmitJobResponse};

use crate::api::error::{ApiError, ApiResult};
use crate::service::job_service;
use crate::state::AppState;

/// POST /submit-job
/// Dispatch a mockup job and respond once the worker has finished it
pub async fn submit_job(
    State(state): State<AppState>,
    body: Result<Json<SubmitJob>, JsonRejection>,
) -> ApiResult<Json<SubmitJobResponse>> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    tracing::debug!(
        "Job submission: {:?}/{:?} ({:?})",
        req.category,
        req.subcategory,
        req.layout
    );

    let response = job_service::submit_job(&state, req).await?;

    Ok(Json(response))
}
