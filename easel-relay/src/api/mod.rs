//! API Module
//!
//! HTTP API layer of the relay.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod job;
pub mod mockup;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::state::AppState;

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.uploads_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Taxonomy endpoints
        .route("/categories", get(mockup::list_categories))
        .route(
            "/mockup-image/{category}/{subcategory}/{layout}",
            get(mockup::get_mockup_image),
        )
        // Job endpoints
        .route("/submit-job", post(job::submit_job))
        // Result file endpoints
        .route("/upload-mockup", post(upload::upload_mockup))
        .route("/delete-mockup/{filename}", delete(upload::delete_mockup))
        .nest_service("/uploads", uploads)
        // Add state and middleware
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
