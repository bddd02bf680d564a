//! Route descriptors and the append-only route registry.

use std::collections::{BTreeMap, BTreeSet};

use http::Method;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while assembling the registry. These are startup
/// configuration failures; the process should refuse to boot on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same method+path pair was registered twice.
    #[error("duplicate route registration: {method} {path}")]
    Duplicate { method: Method, path: String },

    /// Declared path parameters and `{placeholder}`s in the path disagree.
    #[error("path parameter mismatch on {method} {path}: {detail}")]
    ParameterMismatch {
        method: Method,
        path: String,
        detail: String,
    },
}

/// One declared path parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct PathParam {
    pub name: String,
    pub schema: Value,
}

/// Response shape for one status code.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSpec {
    pub description: String,
    pub schema: Option<Value>,
}

/// Metadata describing one REST endpoint: method, templated path, request
/// shape, and per-status response shapes. Immutable once registered.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
    pub method: Method,
    pub path: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub path_params: Vec<PathParam>,
    pub body_schema: Option<Value>,
    pub responses: BTreeMap<u16, ResponseSpec>,
}

impl RouteDescriptor {
    pub fn new(method: Method, path: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            summary: summary.into(),
            tags: Vec::new(),
            path_params: Vec::new(),
            body_schema: None,
            responses: BTreeMap::new(),
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn path_param(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.path_params.push(PathParam {
            name: name.into(),
            schema,
        });
        self
    }

    pub fn body(mut self, schema: Value) -> Self {
        self.body_schema = Some(schema);
        self
    }

    pub fn response(mut self, status: u16, description: impl Into<String>) -> Self {
        self.responses.insert(
            status,
            ResponseSpec {
                description: description.into(),
                schema: None,
            },
        );
        self
    }

    pub fn response_with_schema(
        mut self,
        status: u16,
        description: impl Into<String>,
        schema: Value,
    ) -> Self {
        self.responses.insert(
            status,
            ResponseSpec {
                description: description.into(),
                schema: Some(schema),
            },
        );
        self
    }
}

/// Append-only collection of route descriptors, built during an explicit
/// initialization phase and read-only afterwards. Iteration order is
/// registration order.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<RouteDescriptor>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, returning a reference to the stored entry.
    ///
    /// Fails when the method+path pair is already present, or when the
    /// declared path parameters do not line up with the `{placeholder}`s in
    /// the path template.
    pub fn register(
        &mut self,
        descriptor: RouteDescriptor,
    ) -> Result<&RouteDescriptor, RegistryError> {
        if self
            .routes
            .iter()
            .any(|r| r.method == descriptor.method && r.path == descriptor.path)
        {
            return Err(RegistryError::Duplicate {
                method: descriptor.method,
                path: descriptor.path,
            });
        }

        let mismatch = {
            let in_path: BTreeSet<&str> = crate::url::placeholders(&descriptor.path).collect();
            let declared: BTreeSet<&str> = descriptor
                .path_params
                .iter()
                .map(|p| p.name.as_str())
                .collect();
            if in_path == declared {
                None
            } else {
                let missing: Vec<&str> = in_path.difference(&declared).copied().collect();
                let extra: Vec<&str> = declared.difference(&in_path).copied().collect();
                Some(format!("undeclared {missing:?}, unused {extra:?}"))
            }
        };
        if let Some(detail) = mismatch {
            return Err(RegistryError::ParameterMismatch {
                method: descriptor.method,
                path: descriptor.path,
                detail,
            });
        }

        self.routes.push(descriptor);
        Ok(self.routes.last().unwrap())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    fn view_locked_descriptor() -> RouteDescriptor {
        RouteDescriptor::new(
            Method::PUT,
            "/table/{tableId}/view/{viewId}/locked",
            "Lock or unlock a view",
        )
        .tag("view")
        .path_param("tableId", schema::string())
        .path_param("viewId", schema::string())
        .body(schema::object(
            [("isLocked", schema::boolean())],
            ["isLocked"],
        ))
        .response(200, "updated")
    }

    #[test]
    fn register_grows_by_one_and_returns_stored_descriptor() {
        let mut registry = RouteRegistry::new();
        let descriptor = view_locked_descriptor();

        assert_eq!(registry.len(), 0);
        let stored = registry.register(descriptor.clone()).unwrap();
        assert_eq!(stored, &descriptor);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_method_and_path_is_a_configuration_error() {
        let mut registry = RouteRegistry::new();
        registry.register(view_locked_descriptor()).unwrap();

        let err = registry.register(view_locked_descriptor()).unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_path_different_method_coexists() {
        let mut registry = RouteRegistry::new();
        registry.register(view_locked_descriptor()).unwrap();

        let mut get = view_locked_descriptor();
        get.method = Method::GET;
        registry.register(get).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn undeclared_placeholder_is_rejected() {
        let mut registry = RouteRegistry::new();
        let descriptor = RouteDescriptor::new(Method::GET, "/table/{tableId}", "fetch")
            .response(200, "ok");

        let err = registry.register(descriptor).unwrap_err();
        assert!(matches!(err, RegistryError::ParameterMismatch { .. }));
    }

    #[test]
    fn declared_param_without_placeholder_is_rejected() {
        let mut registry = RouteRegistry::new();
        let descriptor = RouteDescriptor::new(Method::GET, "/health", "health")
            .path_param("tableId", schema::string())
            .response(200, "ok");

        let err = registry.register(descriptor).unwrap_err();
        assert!(matches!(err, RegistryError::ParameterMismatch { .. }));
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let mut registry = RouteRegistry::new();
        registry.register(view_locked_descriptor()).unwrap();
        registry
            .register(
                RouteDescriptor::new(Method::GET, "/health", "health").response(200, "ok"),
            )
            .unwrap();

        let paths: Vec<&str> = registry.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["/table/{tableId}/view/{viewId}/locked", "/health"]);
    }
}
