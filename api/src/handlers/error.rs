use crate::config::ErrorConfig;
use crate::dto::error::{ApiError, ApiErrorExt};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use apperr_core::errors::translator::to_api_error;
use once_cell::sync::Lazy;
use std::error::Error as StdError;
use std::fmt;

static ERROR_CONFIG: Lazy<ErrorConfig> = Lazy::new(ErrorConfig::from_env);

/// Error type returned by request handlers.
///
/// Anything convertible into `anyhow::Error` (including `AppError`) can be
/// returned with `?`. The response body only ever holds the translated
/// [`ApiError`].
#[derive(Debug)]
pub struct HandlerError(anyhow::Error);

impl HandlerError {
    /// Translated payload for this error
    pub fn api_error(&self) -> ApiError {
        translate(&self.0)
    }
}

impl<E> From<E> for HandlerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        self.api_error().status()
    }

    fn error_response(&self) -> HttpResponse {
        handle_error_with_config(&self.0, &ERROR_CONFIG)
    }
}

fn translate(error: &anyhow::Error) -> ApiError {
    let source: &(dyn StdError + 'static) = error.as_ref();
    let (api_error, _) = to_api_error(Some(source));
    api_error
}

pub fn handle_error(error: &anyhow::Error) -> HttpResponse {
    handle_error_with_config(error, &ERROR_CONFIG)
}

/// Log the full error server-side and render its sanitized payload
pub fn handle_error_with_config(error: &anyhow::Error, config: &ErrorConfig) -> HttpResponse {
    let api_error = translate(error);
    let status = api_error.status();

    if status.is_server_error() {
        log::error!("API Error ({}): {:?}", status.as_u16(), error);
    } else if config.log_client_errors {
        log::warn!("API Error ({}): {:?}", status.as_u16(), error);
    } else {
        log::debug!("API Error ({}): {:?}", status.as_u16(), error);
    }

    api_error.to_response()
}
