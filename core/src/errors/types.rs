//! Error type definitions for signing keys and token issuance
//!
//! Callers decide how these surface to end users; every variant maps to a
//! stable error code through [`IntoErrorResponse`].

use std::path::PathBuf;

use idt_shared::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Failures raised by a signing key provider
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Failed to read private key from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid private key format: {source}")]
    InvalidKey {
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    #[error("Signing key unavailable: {message}")]
    Unavailable { message: String },
}

/// Token issuance errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Signing key unavailable")]
    KeyUnavailable {
        #[source]
        source: KeyError,
    },

    #[error("Error signing token: {source}")]
    SigningError {
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    #[error("Token expiry out of range: issued at {issued_at}, lifetime {lifetime_seconds}s")]
    ExpiryOutOfRange { issued_at: i64, lifetime_seconds: i64 },

    #[error("Invalid token configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl TokenError {
    /// Stable code identifying the failure class
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::KeyUnavailable { .. } => error_codes::KEY_UNAVAILABLE,
            TokenError::SigningError { .. } => error_codes::TOKEN_SIGNING_FAILED,
            TokenError::ExpiryOutOfRange { .. } => error_codes::TOKEN_EXPIRY_OUT_OF_RANGE,
            TokenError::InvalidConfiguration { .. } => error_codes::INVALID_TOKEN_CONFIG,
        }
    }
}

impl From<KeyError> for TokenError {
    fn from(source: KeyError) -> Self {
        TokenError::KeyUnavailable { source }
    }
}

impl IntoErrorResponse for TokenError {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.error_code(), self.to_string())
    }
}
