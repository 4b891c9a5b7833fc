//! Token issuance module
//!
//! This module builds and signs identity tokens:
//! - RS256 signing over the `uid`/`roles`/`iat`/`exp`/`iss` claims
//! - Pluggable private key providers (in-memory PEM, PEM file)
//! - Injectable clock for deterministic expiry
//! - Signing policy (lifetime, issuer labels, default roles)

mod clock;
mod config;
mod key_provider;
mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{IssuerLabels, TokenIssuerConfig, MAX_TOKEN_LIFETIME_DAYS};
pub use key_provider::{FileKeyProvider, PemKeyProvider, SigningKeyProvider};
pub use service::TokenIssuer;
