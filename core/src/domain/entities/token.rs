//! Token entities for signed identity tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Role granted to every issued token
pub const DEFAULT_ROLE: &str = "user";

/// Usage context a token is issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    /// Interactive API session
    Api,
    /// Long-lived streaming / event-stream connection
    Streaming,
}

impl From<bool> for SessionKind {
    fn from(is_streaming: bool) -> Self {
        if is_streaming {
            SessionKind::Streaming
        } else {
            SessionKind::Api
        }
    }
}

/// Claims structure for the signed payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub uid: i64,

    /// Granted roles, in order
    pub roles: Vec<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer label
    pub iss: String,
}

impl Claims {
    /// Creates claims issued at `issued_at` and valid for `lifetime`
    ///
    /// # Arguments
    ///
    /// * `uid` - The user's identifier
    /// * `roles` - Roles to assert
    /// * `issued_at` - Instant of issuance
    /// * `lifetime` - How long the token stays valid
    /// * `issuer` - Issuer label for the usage context
    ///
    /// # Returns
    ///
    /// `None` if `issued_at + lifetime` falls outside the representable range
    pub fn new(
        uid: i64,
        roles: Vec<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
        issuer: impl Into<String>,
    ) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(lifetime)?;

        Some(Self {
            uid,
            roles,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: issuer.into(),
        })
    }

    /// Seconds between issuance and expiry
    pub fn lifetime_seconds(&self) -> i64 {
        self.exp - self.iat
    }
}

/// Result of a successful issuance, usually placed in an HTTP response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Expiration timestamp in unix seconds
    pub expires: i64,

    /// Compact encoded token
    pub token: String,
}
