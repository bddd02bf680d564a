//! `gridbase-openapi` - typed route descriptors and document generation.
//!
//! Endpoints are declared once as [`RouteDescriptor`]s and collected into an
//! explicitly-constructed [`RouteRegistry`] during startup. The same
//! descriptors drive the generated OpenAPI document and the path templates
//! used by the server and the typed client, so the three can never drift
//! apart.

pub mod document;
pub mod registry;
pub mod routes;
pub mod schema;
pub mod url;

pub use document::{DocumentInfo, generate_document};
pub use registry::{
    PathParam, RegistryError, ResponseSpec, RouteDescriptor, RouteRegistry,
};
pub use url::{UrlBuildError, build_url};
