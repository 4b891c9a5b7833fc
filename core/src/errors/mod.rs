//! Domain-specific error types for token issuance.

mod types;


pub use types::{KeyError, TokenError};

/// Result alias for issuance operations
pub type TokenResult<T> = Result<T, TokenError>;
