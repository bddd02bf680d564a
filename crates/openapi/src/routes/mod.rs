//! Concrete route definitions for the view surface.
//!
//! Path templates live here as constants so the server, the typed client,
//! and the generated document all reference the same strings.

pub mod share;
pub mod view;

use crate::registry::{RegistryError, RouteRegistry};

/// Register every route of the API, in one explicit initialization pass.
///
/// Called once at startup; any error here is a boot failure.
pub fn build_routes(registry: &mut RouteRegistry) -> Result<(), RegistryError> {
    view::register(registry)?;
    share::register(registry)?;
    Ok(())
}
