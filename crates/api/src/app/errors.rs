//! Mapping from [`HttpError`] to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gridbase_core::HttpError;

/// Render an [`HttpError`] as `(status, {"error", "message", "data"?})`.
pub fn error_response(err: HttpError) -> axum::response::Response {
    let status =
        StatusCode::from_u16(err.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut body = json!({
        "error": err.code,
        "message": err.message,
    });
    if let Some(data) = err.data {
        body["data"] = data;
    }
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbase_core::ErrorCode;

    #[test]
    fn code_travels_as_snake_case_error_field() {
        let response = error_response(HttpError::view_locked("view is locked"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn out_of_range_status_degrades_to_500() {
        let err = HttpError::new(ErrorCode::InternalServerError, "boom").with_status(99);
        let response = error_response(err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
