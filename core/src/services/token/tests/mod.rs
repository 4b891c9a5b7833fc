//! Shared fixtures for token issuer tests

mod rs256_tests;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, TimeZone, Utc};

use crate::errors::KeyError;
use crate::services::token::{FixedClock, PemKeyProvider, SigningKeyProvider, TokenIssuer, TokenIssuerConfig};

/// 2048-bit RSA key pair used to sign test tokens
pub(super) const ISSUER_PRIVATE_KEY: &str = include_str!("../../../../tests/fixtures/issuer_private.pem");
pub(super) const ISSUER_PUBLIC_KEY: &str = include_str!("../../../../tests/fixtures/issuer_public.pem");

/// Unrelated key pair that must never validate issuer tokens
pub(super) const OTHER_PUBLIC_KEY: &str = include_str!("../../../../tests/fixtures/other_public.pem");

/// Provider that always fails, standing in for an unreachable key store
pub(super) struct FailingKeyProvider;

impl SigningKeyProvider for FailingKeyProvider {
    fn private_key(&self) -> Result<jsonwebtoken::EncodingKey, KeyError> {
        Err(KeyError::Unavailable {
            message: "key store offline".to_string(),
        })
    }
}

pub(super) fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
}

pub(super) fn pem_provider() -> PemKeyProvider {
    PemKeyProvider::from_pem(ISSUER_PRIVATE_KEY).expect("fixture key parses")
}

/// Issuer with the default policy and a clock pinned to [`issued_at`]
pub(super) fn fixed_issuer() -> TokenIssuer<PemKeyProvider, FixedClock> {
    TokenIssuer::with_clock(pem_provider(), FixedClock::at(issued_at()), TokenIssuerConfig::default())
        .expect("default config is valid")
}

/// Decodes the payload segment without checking the signature
pub(super) fn decode_payload(token: &str) -> serde_json::Value {
    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(segments.len(), 3, "compact token has three segments");
    let bytes = URL_SAFE_NO_PAD.decode(segments[1]).expect("payload is base64url");
    serde_json::from_slice(&bytes).expect("payload is JSON")
}

/// Decodes the header segment without checking the signature
pub(super) fn decode_header(token: &str) -> serde_json::Value {
    let header = token.split('.').next().expect("header segment");
    let bytes = URL_SAFE_NO_PAD.decode(header).expect("header is base64url");
    serde_json::from_slice(&bytes).expect("header is JSON")
}
