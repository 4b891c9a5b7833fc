//! Token issuance configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default token lifetime in seconds (1 day)
pub const DEFAULT_TOKEN_LIFETIME_SECONDS: i64 = 86_400;

/// Default private key location, relative to the working directory
pub const DEFAULT_PRIVATE_KEY_PATH: &str = "keys/jwt_private_key.pem";

/// Identity token configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Token lifetime in seconds
    #[serde(default = "default_lifetime_seconds")]
    pub lifetime_seconds: i64,

    /// Issuer label for standard API sessions
    #[serde(default = "default_api_issuer")]
    pub api_issuer: String,

    /// Issuer label for streaming (SSE) sessions
    #[serde(default = "default_sse_issuer")]
    pub sse_issuer: String,

    /// Roles granted to every issued token
    #[serde(default = "default_roles")]
    pub default_roles: Vec<String>,

    /// Path to the PEM-encoded RSA private key
    #[serde(default = "default_private_key_path")]
    pub private_key_path: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            lifetime_seconds: default_lifetime_seconds(),
            api_issuer: default_api_issuer(),
            sse_issuer: default_sse_issuer(),
            default_roles: default_roles(),
            private_key_path: default_private_key_path(),
        }
    }
}

impl TokenConfig {
    /// Load token configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            lifetime_seconds: env::var("TOKEN_LIFETIME_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.lifetime_seconds),
            api_issuer: env::var("TOKEN_API_ISSUER").unwrap_or(defaults.api_issuer),
            sse_issuer: env::var("TOKEN_SSE_ISSUER").unwrap_or(defaults.sse_issuer),
            default_roles: env::var("TOKEN_DEFAULT_ROLES")
                .ok()
                .map(|v| parse_roles(&v))
                .filter(|roles| !roles.is_empty())
                .unwrap_or(defaults.default_roles),
            private_key_path: env::var("JWT_PRIVATE_KEY_PATH")
                .unwrap_or(defaults.private_key_path),
        }
    }

    /// Set the token lifetime in hours, saturating at `i64::MAX` seconds
    pub fn with_lifetime_hours(mut self, hours: i64) -> Self {
        self.lifetime_seconds = hours.saturating_mul(3600);
        self
    }

    /// Set the private key path
    pub fn with_private_key_path(mut self, path: impl Into<String>) -> Self {
        self.private_key_path = path.into();
        self
    }
}

/// Split a comma separated role list, dropping blanks
pub fn parse_roles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(String::from)
        .collect()
}

fn default_lifetime_seconds() -> i64 {
    DEFAULT_TOKEN_LIFETIME_SECONDS
}

fn default_api_issuer() -> String {
    String::from("api")
}

fn default_sse_issuer() -> String {
    String::from("sse")
}

fn default_roles() -> Vec<String> {
    vec![String::from("user")]
}

fn default_private_key_path() -> String {
    String::from(DEFAULT_PRIVATE_KEY_PATH)
}
