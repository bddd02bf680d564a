//! Application wiring: state, router construction, error mapping.

pub mod errors;
pub mod routes;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{Extension, Router};
use serde_json::Value;
use tower::ServiceBuilder;

use gridbase_core::{HttpError, ShareId, TableId, View, ViewId};
use gridbase_openapi::document::{DocumentInfo, generate_document};
use gridbase_openapi::registry::{RegistryError, RouteRegistry};
use gridbase_openapi::routes::build_routes;

use crate::config::Config;
use crate::readonly::ReadonlyClient;

/// Process-wide application state.
///
/// The route registry is built here, once, during explicit initialization;
/// afterwards only its generated document is read. The view store is
/// in-memory (dev/test wiring; persistence is out of scope).
pub struct AppState {
    views: Mutex<HashMap<(TableId, ViewId), View>>,
    document: Value,
    readonly: ReadonlyClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, RegistryError> {
        let mut registry = RouteRegistry::new();
        build_routes(&mut registry)?;
        let document = generate_document(
            &registry,
            &DocumentInfo::new("gridbase API", env!("CARGO_PKG_VERSION")),
        );

        Ok(Self {
            views: Mutex::new(HashMap::new()),
            document,
            readonly: ReadonlyClient::new(config.internal_origin.clone()),
        })
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn readonly(&self) -> &ReadonlyClient {
        &self.readonly
    }

    /// Insert a view directly, bypassing HTTP. Used by tests and demo setup.
    pub fn seed_view(&self, view: View) {
        self.views
            .lock()
            .unwrap()
            .insert((view.table_id.clone(), view.id.clone()), view);
    }

    pub fn get_view(&self, table_id: &TableId, view_id: &ViewId) -> Option<View> {
        self.views
            .lock()
            .unwrap()
            .get(&(table_id.clone(), view_id.clone()))
            .cloned()
    }

    /// Apply a mutation to a stored view.
    pub fn update_view(
        &self,
        table_id: &TableId,
        view_id: &ViewId,
        mutate: impl FnOnce(&mut View) -> Result<(), HttpError>,
    ) -> Result<(), HttpError> {
        let mut views = self.views.lock().unwrap();
        let view = views
            .get_mut(&(table_id.clone(), view_id.clone()))
            .ok_or_else(|| HttpError::not_found("view not found"))?;
        mutate(view)
    }

    /// Resolve a share id to its view, honoring the enable flag.
    pub fn resolve_share(&self, share_id: &ShareId, view_id: &ViewId) -> Option<View> {
        self.views
            .lock()
            .unwrap()
            .values()
            .find(|v| {
                v.id == *view_id && v.enable_share && v.share_id.as_ref() == Some(share_id)
            })
            .cloned()
    }
}

/// Build the application router around shared state.
pub fn build_app(state: Arc<AppState>) -> Router {
    routes::router().layer(ServiceBuilder::new().layer(Extension(state)))
}
