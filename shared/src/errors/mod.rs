//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error response structure handed to callers that surface failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }
}

/// Error codes for token issuance failures
pub mod error_codes {
    pub const KEY_UNAVAILABLE: &str = "KEY_UNAVAILABLE";
    pub const TOKEN_SIGNING_FAILED: &str = "TOKEN_SIGNING_FAILED";
    pub const TOKEN_EXPIRY_OUT_OF_RANGE: &str = "TOKEN_EXPIRY_OUT_OF_RANGE";
    pub const INVALID_TOKEN_CONFIG: &str = "INVALID_TOKEN_CONFIG";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}
