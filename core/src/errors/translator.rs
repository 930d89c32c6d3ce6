//! Translation of arbitrary errors into client-safe API errors
//!
//! Classification is a pure function of its input. Anything that is not an
//! [`AppError`] (or an error chain containing one) is reported as an internal
//! error with the generic internal message, so foreign error text never
//! reaches the client.

use super::app_error::AppError;
use super::kind::ErrorKind;
use apperr_shared::{error_codes, ApiError};
use std::error::Error as StdError;

/// HTTP status for a kind
pub fn status_for(kind: ErrorKind) -> u16 {
    kind.status_code()
}

/// HTTP status for a raw code string; anything that is not a known kind is
/// treated as internal.
pub fn status_for_code(code: &str) -> u16 {
    code.parse::<ErrorKind>()
        .map(status_for)
        .unwrap_or_else(|_| status_for(ErrorKind::Internal))
}

/// Find the first [`AppError`] in `err`'s source chain.
///
/// Returns `None` for an absent error or a chain without an `AppError`.
pub fn extract_app_error<'a>(err: Option<&'a (dyn StdError + 'static)>) -> Option<&'a AppError> {
    let mut current = err;
    while let Some(err) = current {
        if let Some(app_error) = err.downcast_ref::<AppError>() {
            return Some(app_error);
        }
        current = err.source();
    }
    None
}

/// Classify `err` into an API payload and the HTTP status to send it with.
///
/// Never fails. Unclassifiable input maps to the internal kind with the
/// generic internal message.
pub fn to_api_error(err: Option<&(dyn StdError + 'static)>) -> (ApiError, u16) {
    let api_error = match extract_app_error(err) {
        Some(app_error) => ApiError::from(app_error),
        None => ApiError::new(
            error_codes::INTERNAL_ERROR,
            error_codes::INTERNAL_ERROR,
            status_for(ErrorKind::Internal),
        ),
    };
    let status = api_error.status_code();
    (api_error, status)
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        ApiError::new(err.kind.as_str(), err.message.as_str(), status_for(err.kind))
    }
}
