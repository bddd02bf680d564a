//! Readonly forwarding client for the share surface.
//!
//! One outbound request per inbound share request. The inbound session
//! cookie (carried in an explicit [`ShareContext`]) is attached to the
//! outbound call; a missing cookie is logged and the request proceeds
//! unauthenticated rather than aborting.

use axum::http::header;
use serde_json::Value;

use gridbase_core::{HttpError, HttpResult, TableId, ViewId};
use gridbase_openapi::routes::view::VIEW_PATH;
use gridbase_openapi::url::build_url;

use crate::context::ShareContext;

#[derive(Debug, Clone)]
pub struct ReadonlyClient {
    http: reqwest::Client,
    internal_origin: String,
}

impl ReadonlyClient {
    pub fn new(internal_origin: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            internal_origin: internal_origin.into(),
        }
    }

    /// Fetch a view from the internal API on behalf of a share request.
    pub async fn fetch_view(
        &self,
        ctx: &ShareContext,
        table_id: &TableId,
        view_id: &ViewId,
    ) -> HttpResult<Value> {
        let path = build_url(
            VIEW_PATH,
            &[("tableId", table_id.as_str()), ("viewId", view_id.as_str())],
        )
        .map_err(|e| HttpError::internal(format!("url build failed: {e}")))?;

        let mut request = self.http.get(format!("{}{}", self.internal_origin, path));
        match ctx.session_cookie() {
            Some(cookie) => {
                request = request.header(
                    header::COOKIE,
                    format!("{}={}", ShareContext::SESSION_COOKIE, cookie),
                );
            }
            None => {
                // Degrade and continue: the internal API decides what an
                // unauthenticated readonly request may see.
                tracing::warn!(
                    view_id = %view_id,
                    "share request carries no session cookie; forwarding unauthenticated"
                );
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::bad_gateway(format!("internal api unreachable: {e}")))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(HttpError::from_parts(
                Some(format!("internal api returned status {status}")),
                Some(status),
                None,
                None,
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| HttpError::bad_gateway(format!("internal api response unreadable: {e}")))
    }
}
