//! Configuration helpers
//!
//! - `env` - dotenv loading and typed environment lookups

pub mod env;
