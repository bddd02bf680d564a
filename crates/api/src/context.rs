//! Request-scoped context for the readonly share surface.
//!
//! The session cookie is read from the inbound headers once, at the handler,
//! and passed down the call chain explicitly. Nothing below the handler
//! touches ambient request state.

use axum::http::{HeaderMap, header};

/// Share-request context: the inbound session cookie, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareContext {
    session_cookie: Option<String>,
}

impl ShareContext {
    /// Name of the session cookie forwarded to the internal API.
    pub const SESSION_COOKIE: &'static str = "gridbase_session";

    pub fn new(session_cookie: Option<String>) -> Self {
        Self { session_cookie }
    }

    /// Extract the session cookie value from the inbound `Cookie` headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let prefix = format!("{}=", Self::SESSION_COOKIE);
        let session_cookie = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .map(str::trim)
            .find_map(|pair| pair.strip_prefix(prefix.as_str()))
            .map(str::to_string);
        Self { session_cookie }
    }

    pub fn session_cookie(&self) -> Option<&str> {
        self.session_cookie.as_deref()
    }
}
