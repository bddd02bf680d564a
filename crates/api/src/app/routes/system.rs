//! Health and API-description endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use axum::http::StatusCode;

use crate::app::AppState;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Serve the OpenAPI document generated from the route registry at startup.
pub async fn openapi_document(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<serde_json::Value> {
    Json(state.document().clone())
}
