//! Client-facing error payload

use serde::Serialize;

/// Sanitized error body returned to API clients.
///
/// Serializes as `{"code": ..., "message": ...}`. The HTTP status travels with
/// the value but is never part of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Stable error code, one of [`error_codes`]
    pub code: String,

    /// Message that is safe to show to the client
    pub message: String,

    #[serde(skip)]
    status_code: u16,
}

impl ApiError {
    /// Create a new API error payload
    pub fn new(code: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status_code,
        }
    }

    /// HTTP status this payload should be sent with
    pub fn status_code(&self) -> u16 {
        self.status_code
    }
}

/// Canonical code strings, one per error kind
pub mod error_codes {
    pub const NOT_FOUND: &str = "not found";
    pub const BAD_REQUEST: &str = "bad request";
    pub const CONFLICT: &str = "conflict";
    pub const UNAUTHORIZED: &str = "unauthorized";
    pub const FORBIDDEN: &str = "forbidden";
    pub const INTERNAL_ERROR: &str = "internal error";
}
