//! HTTP boundary for application errors
//!
//! Handlers return [`handlers::error::HandlerError`]; it is translated into a
//! sanitized JSON error body with the matching status code.

pub mod config;
pub mod dto;
pub mod handlers;
