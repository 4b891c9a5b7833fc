//! Tests for RS256 signatures produced by the issuer

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use super::{decode_header, fixed_issuer, ISSUER_PUBLIC_KEY, OTHER_PUBLIC_KEY};
use crate::domain::entities::identity::UserId;
use crate::domain::entities::token::Claims;

/// Validation for fixed-clock tokens, which are long expired by now
fn signature_only(issuer: &str) -> Validation {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp", "iat", "iss"]);
    validation.set_issuer(&[issuer]);
    validation
}

#[test]
fn test_header_declares_rs256() {
    let issued = fixed_issuer().generate(&UserId(42), false).unwrap();

    let header = decode_header(&issued.token);
    assert_eq!(header["alg"], "RS256");
    assert_eq!(header["typ"], "JWT");
}

#[test]
fn test_token_verifies_with_paired_public_key() {
    let issued = fixed_issuer().generate(&UserId(42), false).unwrap();
    let key = DecodingKey::from_rsa_pem(ISSUER_PUBLIC_KEY.as_bytes()).unwrap();

    let data = decode::<Claims>(&issued.token, &key, &signature_only("api"))
        .expect("signature verifies");

    assert_eq!(data.claims.uid, 42);
    assert_eq!(data.claims.roles, vec!["user".to_string()]);
    assert_eq!(data.claims.lifetime_seconds(), 86_400);
    assert_eq!(data.header.alg, Algorithm::RS256);
}

#[test]
fn test_token_rejected_by_other_public_key() {
    let issued = fixed_issuer().generate(&UserId(42), false).unwrap();
    let key = DecodingKey::from_rsa_pem(OTHER_PUBLIC_KEY.as_bytes()).unwrap();

    let err = decode::<Claims>(&issued.token, &key, &signature_only("api")).unwrap_err();

    assert_eq!(err.kind(), &jsonwebtoken::errors::ErrorKind::InvalidSignature);
}

#[test]
fn test_tampered_payload_rejected() {
    let issued = fixed_issuer().generate(&UserId(42), false).unwrap();
    let key = DecodingKey::from_rsa_pem(ISSUER_PUBLIC_KEY.as_bytes()).unwrap();

    // Splice the payload of a token for another user onto this signature
    let forged_payload = fixed_issuer().generate(&UserId(1), false).unwrap();
    let mut parts: Vec<&str> = issued.token.split('.').collect();
    parts[1] = forged_payload.token.split('.').nth(1).unwrap();
    let forged = parts.join(".");

    assert!(decode::<Claims>(&forged, &key, &signature_only("api")).is_err());
}

#[test]
fn test_streaming_token_fails_api_issuer_check() {
    let issued = fixed_issuer().generate(&UserId(7), true).unwrap();
    let key = DecodingKey::from_rsa_pem(ISSUER_PUBLIC_KEY.as_bytes()).unwrap();

    assert!(decode::<Claims>(&issued.token, &key, &signature_only("sse")).is_ok());
    let err = decode::<Claims>(&issued.token, &key, &signature_only("api")).unwrap_err();
    assert_eq!(err.kind(), &jsonwebtoken::errors::ErrorKind::InvalidIssuer);
}
