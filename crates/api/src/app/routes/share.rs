//! Readonly share endpoint: resolve the share grant, then forward.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use gridbase_core::{HttpError, ShareId, ViewId};

use crate::app::AppState;
use crate::app::errors::error_response;
use crate::context::ShareContext;

pub async fn get_shared_view(
    Extension(state): Extension<Arc<AppState>>,
    Path((share_id, view_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> axum::response::Response {
    let share_id: ShareId = match share_id.parse() {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };
    let view_id: ViewId = match view_id.parse() {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    let Some(view) = state.resolve_share(&share_id, &view_id) else {
        return error_response(HttpError::not_found("share not found or sharing disabled"));
    };

    let ctx = ShareContext::from_headers(&headers);
    match state
        .readonly()
        .fetch_view(&ctx, &view.table_id, &view.id)
        .await
    {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => error_response(e),
    }
}
