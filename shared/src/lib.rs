//! Shared utilities and common types for the identity token workspace
//!
//! This crate provides common functionality used across server modules:
//! - Configuration types
//! - Error response structures
//! - Tracing subscriber setup

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, TokenConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use logging::init_tracing;
