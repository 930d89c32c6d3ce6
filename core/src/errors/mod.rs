//! Application error types and error translation.

mod app_error;
mod kind;
pub mod translator;

#[cfg(test)]
mod tests;

pub use app_error::{AppError, AppResult, BoxError};
pub use kind::{ErrorKind, UnknownErrorKind};
pub use translator::{extract_app_error, status_for, status_for_code, to_api_error};
