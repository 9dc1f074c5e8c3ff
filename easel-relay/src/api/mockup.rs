//! Mockup taxonomy API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use easel_core::dto::mockup::CategoriesResponse;

use crate::api::error::ApiResult;
use crate::service::taxonomy_service;
use crate::state::AppState;

/// GET /categories
/// List template categories and their subcategories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<CategoriesResponse>> {
    let categories = taxonomy_service::list_categories(&state.config.mockups_path).await?;

    tracing::debug!("Found {} categories", categories.len());

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /mockup-image/{category}/{subcategory}/{layout}
/// Serve the preview image of a template
pub async fn get_mockup_image(
    State(state): State<AppState>,
    Path((category, subcategory, layout)): Path<(String, String, String)>,
) -> ApiResult<impl IntoResponse> {
    let bytes = taxonomy_service::read_preview(
        &state.config.mockups_path,
        &category,
        &subcategory,
        &layout,
    )
    .await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], bytes))
}
