//! # apperr core
//!
//! Error taxonomy for application code and the translator that turns any error
//! into a client-safe [`ApiError`](apperr_shared::ApiError) plus an HTTP status.

pub mod errors;

// Re-export commonly used types for convenience
pub use errors::*;
