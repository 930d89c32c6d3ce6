//! Application error carrying a kind, a client-safe message and an optional cause

use super::kind::ErrorKind;
use thiserror::Error;

/// Boxed cause attached to an [`AppError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error raised by application code.
///
/// `message` is meant for clients. `details` holds internal diagnostics; it is
/// exposed as the error's `source()` and never reaches an API payload.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub details: Option<BoxError>,
}

impl AppError {
    /// Create an error of the given kind without details
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Authentication failure. Attach the underlying reason with
    /// [`with_details`](Self::with_details).
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Authorization failure. Attach the underlying reason with
    /// [`with_details`](Self::with_details).
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Unexpected failure. Attach the underlying cause with
    /// [`with_details`](Self::with_details).
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Attach an internal cause
    ///
    /// ```
    /// use apperr_core::errors::{AppError, ErrorKind};
    /// use std::error::Error;
    /// use std::io;
    ///
    /// let cause = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    /// let err = AppError::internal("db down").with_details(cause);
    ///
    /// assert_eq!(err.kind(), ErrorKind::Internal);
    /// assert_eq!(err.to_string(), "db down");
    /// assert_eq!(err.source().unwrap().to_string(), "connection refused");
    /// ```
    pub fn with_details(mut self, details: impl Into<BoxError>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.details.as_deref()
    }

    /// HTTP status for this error's kind
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

/// Result type with AppError as error
pub type AppResult<T> = Result<T, AppError>;
