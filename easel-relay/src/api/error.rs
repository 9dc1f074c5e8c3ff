//! API Error Handling
//!
//! Unified error type and conversion for API responses. Every failure is
//! rendered as `{"success": false, "error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use easel_core::dto::ErrorResponse;

use crate::service::job::JobError;
use crate::service::taxonomy::TaxonomyError;
use crate::service::upload::UploadError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    ServiceUnavailable(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<JobError> for ApiError {
    fn from(err: JobError) -> Self {
        match err {
            JobError::ValidationError(msg) => ApiError::BadRequest(msg),
            JobError::WorkerUnavailable => ApiError::ServiceUnavailable(err.to_string()),
            JobError::Timeout | JobError::WorkerFailure(_) | JobError::Duplicate(_) => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

impl From<TaxonomyError> for ApiError {
    fn from(err: TaxonomyError) -> Self {
        match err {
            TaxonomyError::InvalidLayout | TaxonomyError::InvalidSegment => {
                ApiError::BadRequest(err.to_string())
            }
            TaxonomyError::ImageNotFound => ApiError::NotFound(err.to_string()),
            TaxonomyError::PathUnavailable(_) | TaxonomyError::Io(_) => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::MissingFile | UploadError::InvalidFileName => {
                ApiError::BadRequest(err.to_string())
            }
            UploadError::NotFound => ApiError::NotFound(err.to_string()),
            UploadError::Io(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
