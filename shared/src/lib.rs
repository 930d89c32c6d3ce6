//! Shared types and helpers for the apperr workspace
//!
//! This crate provides functionality used by both the core and api crates:
//! - Client-facing error payloads
//! - Environment configuration helpers

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::env::{get_env, get_env_as, load_config};
pub use errors::{error_codes, ApiError};
