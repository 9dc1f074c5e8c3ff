//! Result file API Handlers

use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use easel_core::dto::mockup::{DeleteResponse, UploadResponse};

use crate::api::error::{ApiError, ApiResult};
use crate::service::upload::UploadError;
use crate::service::upload_service;
use crate::state::AppState;

/// Multipart field carrying the rendered mockup
const UPLOAD_FIELD: &str = "mockup";

/// POST /upload-mockup
/// Store a rendered mockup uploaded by the worker
pub async fn upload_mockup(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or(UploadError::InvalidFileName)?;
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        upload = Some((file_name, data.to_vec()));
    }

    let (file_name, data) = upload.ok_or(UploadError::MissingFile)?;
    let response = upload_service::save_upload(&state.config, &file_name, &data).await?;

    Ok(Json(response))
}

/// DELETE /delete-mockup/{filename}
/// Remove a previously uploaded mockup
pub async fn delete_mockup(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let response = upload_service::delete_upload(&state.config, &file_name).await?;

    Ok(Json(response))
}
