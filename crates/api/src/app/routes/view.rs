//! View endpoints: create, fetch, lock, rename, replace options.

use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use gridbase_core::{HttpError, TableId, View, ViewId, ViewOptions, ViewType};

use crate::app::AppState;
use crate::app::errors::error_response;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateViewRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: ViewType,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLockedRequest {
    pub is_locked: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    pub name: String,
}

fn parse_ids(table_id: &str, view_id: &str) -> Result<(TableId, ViewId), HttpError> {
    Ok((table_id.parse()?, view_id.parse()?))
}

fn ensure_unlocked(view: &View) -> Result<(), HttpError> {
    if view.is_locked {
        Err(HttpError::view_locked("view is locked"))
    } else {
        Ok(())
    }
}

pub async fn create_view(
    Extension(state): Extension<Arc<AppState>>,
    Path(table_id): Path<String>,
    Json(body): Json<CreateViewRequest>,
) -> axum::response::Response {
    let table_id: TableId = match table_id.parse() {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };
    if body.name.trim().is_empty() {
        return error_response(HttpError::validation("name cannot be empty"));
    }

    let view = View::new(table_id, body.name, body.view_type);
    state.seed_view(view.clone());
    (StatusCode::CREATED, Json(view)).into_response()
}

pub async fn get_view(
    Extension(state): Extension<Arc<AppState>>,
    Path((table_id, view_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (table_id, view_id) = match parse_ids(&table_id, &view_id) {
        Ok(ids) => ids,
        Err(e) => return error_response(e),
    };

    match state.get_view(&table_id, &view_id) {
        Some(view) => (StatusCode::OK, Json(view)).into_response(),
        None => error_response(HttpError::not_found("view not found")),
    }
}

pub async fn update_locked(
    Extension(state): Extension<Arc<AppState>>,
    Path((table_id, view_id)): Path<(String, String)>,
    Json(body): Json<UpdateLockedRequest>,
) -> axum::response::Response {
    let (table_id, view_id) = match parse_ids(&table_id, &view_id) {
        Ok(ids) => ids,
        Err(e) => return error_response(e),
    };

    // The locked route itself may always flip the flag, locked or not.
    let result = state.update_view(&table_id, &view_id, |view| {
        view.is_locked = body.is_locked;
        view.last_modified_time = Utc::now();
        Ok(())
    });

    match result {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_options(
    Extension(state): Extension<Arc<AppState>>,
    Path((table_id, view_id)): Path<(String, String)>,
    Json(options): Json<ViewOptions>,
) -> axum::response::Response {
    let (table_id, view_id) = match parse_ids(&table_id, &view_id) {
        Ok(ids) => ids,
        Err(e) => return error_response(e),
    };

    let result = state.update_view(&table_id, &view_id, |view| {
        ensure_unlocked(view)?;
        view.replace_options(options)
    });

    match result {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_name(
    Extension(state): Extension<Arc<AppState>>,
    Path((table_id, view_id)): Path<(String, String)>,
    Json(body): Json<UpdateNameRequest>,
) -> axum::response::Response {
    let (table_id, view_id) = match parse_ids(&table_id, &view_id) {
        Ok(ids) => ids,
        Err(e) => return error_response(e),
    };
    if body.name.trim().is_empty() {
        return error_response(HttpError::validation("name cannot be empty"));
    }

    let result = state.update_view(&table_id, &view_id, |view| {
        ensure_unlocked(view)?;
        view.name = body.name;
        view.last_modified_time = Utc::now();
        Ok(())
    });

    match result {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => error_response(e),
    }
}
