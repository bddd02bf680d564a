//! OpenAPI 3.0 document generation from the route registry.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Value, json};

use crate::registry::{RouteDescriptor, RouteRegistry};

/// Top-level `info` fields of the generated document.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

impl DocumentInfo {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
        }
    }
}

/// Render the registry as an OpenAPI 3.0.3 document.
///
/// Output is deterministic: paths and methods are grouped into sorted maps
/// and the tag list is deduplicated and sorted.
pub fn generate_document(registry: &RouteRegistry, info: &DocumentInfo) -> Value {
    let mut paths: BTreeMap<String, BTreeMap<String, Value>> = BTreeMap::new();
    let mut tags: BTreeSet<String> = BTreeSet::new();

    for route in registry.iter() {
        tags.extend(route.tags.iter().cloned());
        paths
            .entry(route.path.clone())
            .or_default()
            .insert(route.method.as_str().to_lowercase(), operation(route));
    }

    let mut info_obj = json!({"title": info.title, "version": info.version});
    if let Some(description) = &info.description {
        info_obj["description"] = json!(description);
    }

    json!({
        "openapi": "3.0.3",
        "info": info_obj,
        "tags": tags.iter().map(|t| json!({"name": t})).collect::<Vec<_>>(),
        "paths": paths,
    })
}

fn operation(route: &RouteDescriptor) -> Value {
    let mut op = json!({
        "summary": route.summary,
        "responses": responses(route),
    });

    if !route.tags.is_empty() {
        op["tags"] = json!(route.tags);
    }

    if !route.path_params.is_empty() {
        let params: Vec<Value> = route
            .path_params
            .iter()
            .map(|p| {
                json!({
                    "name": p.name,
                    "in": "path",
                    "required": true,
                    "schema": p.schema,
                })
            })
            .collect();
        op["parameters"] = json!(params);
    }

    if let Some(schema) = &route.body_schema {
        op["requestBody"] = json!({
            "required": true,
            "content": {"application/json": {"schema": schema}},
        });
    }

    op
}

fn responses(route: &RouteDescriptor) -> Value {
    let mut out = serde_json::Map::new();
    for (status, spec) in &route.responses {
        let mut response = json!({"description": spec.description});
        if let Some(schema) = &spec.schema {
            response["content"] = json!({"application/json": {"schema": schema}});
        }
        out.insert(status.to_string(), response);
    }
    Value::Object(out)
}
