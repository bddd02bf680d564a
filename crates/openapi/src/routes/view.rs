//! View endpoints.

use http::Method;

use crate::registry::{RegistryError, RouteDescriptor, RouteRegistry};
use crate::schema;

pub const VIEW_CREATE_PATH: &str = "/table/{tableId}/view";
pub const VIEW_PATH: &str = "/table/{tableId}/view/{viewId}";
pub const VIEW_LOCKED_PATH: &str = "/table/{tableId}/view/{viewId}/locked";
pub const VIEW_OPTIONS_PATH: &str = "/table/{tableId}/view/{viewId}/options";
pub const VIEW_NAME_PATH: &str = "/table/{tableId}/view/{viewId}/name";

const TAG: &str = "view";

fn view_schema() -> serde_json::Value {
    schema::object(
        [
            ("id", schema::string()),
            ("tableId", schema::string()),
            ("name", schema::string()),
            (
                "type",
                schema::string_enum(["grid", "calendar", "gallery", "kanban", "form"]),
            ),
            ("options", schema::free_object()),
            ("isLocked", schema::boolean()),
            ("shareId", schema::string()),
            ("enableShare", schema::boolean()),
            ("lastModifiedTime", schema::string()),
        ],
        ["id", "tableId", "name", "type", "lastModifiedTime"],
    )
}

pub(crate) fn register(registry: &mut RouteRegistry) -> Result<(), RegistryError> {
    registry.register(
        RouteDescriptor::new(Method::POST, VIEW_CREATE_PATH, "Create a view")
            .tag(TAG)
            .path_param("tableId", schema::string())
            .body(schema::object(
                [
                    ("name", schema::string()),
                    (
                        "type",
                        schema::string_enum(["grid", "calendar", "gallery", "kanban", "form"]),
                    ),
                ],
                ["name", "type"],
            ))
            .response_with_schema(201, "created", view_schema())
            .response(400, "invalid request"),
    )?;

    registry.register(
        RouteDescriptor::new(Method::GET, VIEW_PATH, "Fetch a view")
            .tag(TAG)
            .path_param("tableId", schema::string())
            .path_param("viewId", schema::string())
            .response_with_schema(200, "the view", view_schema())
            .response(404, "view not found"),
    )?;

    registry.register(
        RouteDescriptor::new(Method::PUT, VIEW_LOCKED_PATH, "Lock or unlock a view")
            .tag(TAG)
            .path_param("tableId", schema::string())
            .path_param("viewId", schema::string())
            .body(schema::object(
                [("isLocked", schema::boolean())],
                ["isLocked"],
            ))
            .response(200, "updated")
            .response(404, "view not found"),
    )?;

    registry.register(
        RouteDescriptor::new(Method::PUT, VIEW_OPTIONS_PATH, "Replace view options")
            .tag(TAG)
            .path_param("tableId", schema::string())
            .path_param("viewId", schema::string())
            .body(schema::free_object())
            .response(200, "updated")
            .response(400, "options do not fit the view type, or view is locked")
            .response(404, "view not found"),
    )?;

    registry.register(
        RouteDescriptor::new(Method::PUT, VIEW_NAME_PATH, "Rename a view")
            .tag(TAG)
            .path_param("tableId", schema::string())
            .path_param("viewId", schema::string())
            .body(schema::object([("name", schema::string())], ["name"]))
            .response(200, "updated")
            .response(400, "view is locked")
            .response(404, "view not found"),
    )?;

    Ok(())
}
