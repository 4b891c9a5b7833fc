//! # IdToken Core
//!
//! Core domain layer for identity token issuance.
//! This crate contains the token entities, the signing key and clock
//! abstractions, the token issuer and its error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Identity, IssuedToken, SessionKind, UserId, DEFAULT_ROLE};
pub use errors::{KeyError, TokenError, TokenResult};
pub use services::token::{
    Clock, FileKeyProvider, FixedClock, IssuerLabels, PemKeyProvider, SigningKeyProvider,
    SystemClock, TokenIssuer, TokenIssuerConfig, MAX_TOKEN_LIFETIME_DAYS,
};
