//! Routing tree. Axum paths are derived from the shared OpenAPI templates
//! so the served surface and the documented surface cannot drift.

use axum::Router;
use axum::routing::{get, post, put};

use gridbase_openapi::routes::share::SHARE_VIEW_PATH;
use gridbase_openapi::routes::view::{
    VIEW_CREATE_PATH, VIEW_LOCKED_PATH, VIEW_NAME_PATH, VIEW_OPTIONS_PATH, VIEW_PATH,
};

pub mod share;
pub mod system;
pub mod view;

/// Convert an OpenAPI path template (`{param}`) to axum syntax (`:param`).
fn axum_path(template: &str) -> String {
    template.replace('{', ":").replace('}', "")
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/openapi.json", get(system::openapi_document))
        .route(&axum_path(VIEW_CREATE_PATH), post(view::create_view))
        .route(&axum_path(VIEW_PATH), get(view::get_view))
        .route(&axum_path(VIEW_LOCKED_PATH), put(view::update_locked))
        .route(&axum_path(VIEW_OPTIONS_PATH), put(view::update_options))
        .route(&axum_path(VIEW_NAME_PATH), put(view::update_name))
        .route(&axum_path(SHARE_VIEW_PATH), get(share::get_shared_view))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_convert_to_axum_syntax() {
        assert_eq!(
            axum_path("/table/{tableId}/view/{viewId}/locked"),
            "/table/:tableId/view/:viewId/locked"
        );
        assert_eq!(axum_path("/health"), "/health");
    }
}
