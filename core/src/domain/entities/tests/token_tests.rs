//! Unit tests for token entities

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::token::{Claims, IssuedToken, SessionKind, DEFAULT_ROLE};

#[test]
fn test_claims_timestamps() {
    let issued_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let claims = Claims::new(
        42,
        vec![DEFAULT_ROLE.to_string()],
        issued_at,
        Duration::days(1),
        "api",
    )
    .unwrap();

    assert_eq!(claims.uid, 42);
    assert_eq!(claims.roles, vec!["user".to_string()]);
    assert_eq!(claims.iat, issued_at.timestamp());
    assert_eq!(claims.exp, (issued_at + Duration::days(1)).timestamp());
    assert_eq!(claims.lifetime_seconds(), 86_400);
    assert_eq!(claims.iss, "api");
}

#[test]
fn test_claims_lifetime_ignores_subsecond_clock() {
    let issued_at = Utc.timestamp_opt(1_700_000_000, 999_999_999).unwrap();
    let claims = Claims::new(1, vec![], issued_at, Duration::days(1), "sse").unwrap();

    assert_eq!(claims.iat, 1_700_000_000);
    assert_eq!(claims.exp - claims.iat, 86_400);
}

#[test]
fn test_claims_expiry_past_max_datetime() {
    let claims = Claims::new(7, vec![], DateTime::<Utc>::MAX_UTC, Duration::seconds(1), "api");
    assert!(claims.is_none());
}

#[test]
fn test_claims_wire_format() {
    let issued_at = Utc.timestamp_opt(1_000, 0).unwrap();
    let claims = Claims::new(
        42,
        vec![DEFAULT_ROLE.to_string()],
        issued_at,
        Duration::days(1),
        "api",
    )
    .unwrap();

    let json = serde_json::to_value(&claims).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "uid": 42,
            "roles": ["user"],
            "iat": 1_000,
            "exp": 87_400,
            "iss": "api"
        })
    );
}

#[test]
fn test_issued_token_wire_format() {
    let issued = IssuedToken {
        expires: 87_400,
        token: "a.b.c".to_string(),
    };

    let json = serde_json::to_value(&issued).unwrap();
    assert_eq!(json, serde_json::json!({ "expires": 87_400, "token": "a.b.c" }));
}

#[test]
fn test_session_kind_from_flag() {
    assert_eq!(SessionKind::from(false), SessionKind::Api);
    assert_eq!(SessionKind::from(true), SessionKind::Streaming);
}
