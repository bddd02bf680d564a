//! Readonly share endpoints.

use http::Method;

use crate::registry::{RegistryError, RouteDescriptor, RouteRegistry};
use crate::schema;

pub const SHARE_VIEW_PATH: &str = "/share/{shareId}/view/{viewId}";

pub(crate) fn register(registry: &mut RouteRegistry) -> Result<(), RegistryError> {
    registry.register(
        RouteDescriptor::new(
            Method::GET,
            SHARE_VIEW_PATH,
            "Fetch a shared view through the readonly proxy",
        )
        .tag("share")
        .path_param("shareId", schema::string())
        .path_param("viewId", schema::string())
        .response_with_schema(200, "the shared view", schema::free_object())
        .response(404, "share not found or sharing disabled")
        .response(502, "internal API unreachable"),
    )?;

    Ok(())
}
