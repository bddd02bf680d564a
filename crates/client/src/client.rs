//! The typed API client.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use gridbase_core::{ErrorCode, HttpError, HttpResult, TableId, View, ViewId, ViewOptions, ViewType};
use gridbase_openapi::routes::view::{
    VIEW_CREATE_PATH, VIEW_LOCKED_PATH, VIEW_NAME_PATH, VIEW_OPTIONS_PATH, VIEW_PATH,
};
use gridbase_openapi::url::build_url;

/// Error payload shape produced by the API layer.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: ErrorCode,
    message: String,
    data: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateLockedBody {
    is_locked: bool,
}

#[derive(Debug, Serialize)]
struct UpdateNameBody<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateViewBody<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    view_type: ViewType,
}

/// Thin client over the view API. Cheap to clone the inner `reqwest::Client`;
/// share one instance per process.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, template: &str, params: &[(&str, &str)]) -> HttpResult<String> {
        let path = build_url(template, params)
            .map_err(|e| HttpError::internal(format!("url build failed: {e}")))?;
        Ok(format!("{}{}", self.base_url, path))
    }

    /// Fetch a view.
    pub async fn get_view(&self, table_id: &TableId, view_id: &ViewId) -> HttpResult<View> {
        let url = self.url(
            VIEW_PATH,
            &[("tableId", table_id.as_str()), ("viewId", view_id.as_str())],
        )?;
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        decode_json(response).await
    }

    /// Create a view under a table.
    pub async fn create_view(
        &self,
        table_id: &TableId,
        name: &str,
        view_type: ViewType,
    ) -> HttpResult<View> {
        let url = self.url(VIEW_CREATE_PATH, &[("tableId", table_id.as_str())])?;
        let response = self
            .http
            .post(url)
            .json(&CreateViewBody { name, view_type })
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    /// Lock or unlock a view. Resolves with no payload on HTTP 200.
    pub async fn update_view_locked(
        &self,
        table_id: &TableId,
        view_id: &ViewId,
        is_locked: bool,
    ) -> HttpResult<()> {
        let url = self.url(
            VIEW_LOCKED_PATH,
            &[("tableId", table_id.as_str()), ("viewId", view_id.as_str())],
        )?;
        let response = self
            .http
            .put(url)
            .json(&UpdateLockedBody { is_locked })
            .send()
            .await
            .map_err(transport_error)?;
        decode_empty(response).await
    }

    /// Replace the view's options object wholesale.
    pub async fn update_view_options(
        &self,
        table_id: &TableId,
        view_id: &ViewId,
        options: &ViewOptions,
    ) -> HttpResult<()> {
        let url = self.url(
            VIEW_OPTIONS_PATH,
            &[("tableId", table_id.as_str()), ("viewId", view_id.as_str())],
        )?;
        let response = self
            .http
            .put(url)
            .json(options)
            .send()
            .await
            .map_err(transport_error)?;
        decode_empty(response).await
    }

    /// Rename a view.
    pub async fn update_view_name(
        &self,
        table_id: &TableId,
        view_id: &ViewId,
        name: &str,
    ) -> HttpResult<()> {
        let url = self.url(
            VIEW_NAME_PATH,
            &[("tableId", table_id.as_str()), ("viewId", view_id.as_str())],
        )?;
        let response = self
            .http
            .put(url)
            .json(&UpdateNameBody { name })
            .send()
            .await
            .map_err(transport_error)?;
        decode_empty(response).await
    }
}

fn transport_error(err: reqwest::Error) -> HttpError {
    HttpError::internal(format!("transport failure: {err}"))
}

/// Turn a non-2xx response into a typed [`HttpError`].
///
/// Structured error payloads keep their code and data; anything else is
/// synthesized from the status line so the caller still gets a real status.
async fn error_from_response(response: reqwest::Response) -> HttpError {
    let status = response.status().as_u16();
    tracing::debug!(status, "api call returned an error status");
    match response.json::<ErrorBody>().await {
        Ok(body) => {
            HttpError::from_parts(Some(body.message), Some(status), Some(body.error), body.data)
        }
        Err(_) => HttpError::from_parts(None, Some(status), None, None),
    }
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> HttpResult<T> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| HttpError::internal(format!("response decode failed: {e}")))
}

async fn decode_empty(response: reqwest::Response) -> HttpResult<()> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}
