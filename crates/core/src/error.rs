//! Wire-level error model.
//!
//! Every failure that crosses the HTTP boundary is an [`HttpError`]: an HTTP
//! status, a machine-readable [`ErrorCode`], a human-readable message, and
//! optional structured data. Callers branch on `code`, never on message text.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Result type used by everything that can fail across the HTTP boundary.
pub type HttpResult<T> = Result<T, HttpError>;

/// Machine-readable application error codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ValidationError,
    Unauthorized,
    Forbidden,
    NotFound,
    ViewLocked,
    Conflict,
    InternalServerError,
    BadGateway,
}

impl ErrorCode {
    /// Default HTTP status carried by this code.
    pub fn status(&self) -> u16 {
        match self {
            ErrorCode::ValidationError => 400,
            ErrorCode::Unauthorized => 401,
            ErrorCode::Forbidden => 403,
            ErrorCode::NotFound => 404,
            ErrorCode::ViewLocked => 400,
            ErrorCode::Conflict => 409,
            ErrorCode::InternalServerError => 500,
            ErrorCode::BadGateway => 502,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "validation_error",
            ErrorCode::Unauthorized => "unauthorized",
            ErrorCode::Forbidden => "forbidden",
            ErrorCode::NotFound => "not_found",
            ErrorCode::ViewLocked => "view_locked",
            ErrorCode::Conflict => "conflict",
            ErrorCode::InternalServerError => "internal_server_error",
            ErrorCode::BadGateway => "bad_gateway",
        }
    }
}

/// Structured error crossing the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct HttpError {
    pub status: u16,
    pub code: ErrorCode,
    pub message: String,
    pub data: Option<Value>,
}

impl HttpError {
    /// Build an error from a code and message; the status follows the code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: code.status(),
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Build an error from optional parts.
    ///
    /// Fallbacks: empty/absent message becomes `"Error"`, absent code becomes
    /// [`ErrorCode::InternalServerError`], absent status follows the code.
    pub fn from_parts(
        message: Option<String>,
        status: Option<u16>,
        code: Option<ErrorCode>,
        data: Option<Value>,
    ) -> Self {
        let code = code.unwrap_or(ErrorCode::InternalServerError);
        let message = match message {
            Some(m) if !m.is_empty() => m,
            _ => "Error".to_string(),
        };
        Self {
            status: status.unwrap_or_else(|| code.status()),
            code,
            message,
            data,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn view_locked(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ViewLocked, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalServerError, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadGateway, message)
    }
}

impl From<String> for HttpError {
    fn from(message: String) -> Self {
        Self::new(ErrorCode::InternalServerError, message)
    }
}

impl From<&str> for HttpError {
    fn from(message: &str) -> Self {
        Self::new(ErrorCode::InternalServerError, message)
    }
}
