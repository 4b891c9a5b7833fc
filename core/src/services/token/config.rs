//! Configuration for the token issuer

use chrono::Duration;
use idt_shared::config::TokenConfig;

use crate::domain::entities::token::{SessionKind, DEFAULT_ROLE};
use crate::errors::TokenError;

/// Longest accepted token lifetime (5 years)
pub const MAX_TOKEN_LIFETIME_DAYS: i64 = 5 * 365;

/// Issuer labels, one per usage context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerLabels {
    /// Label for standard API sessions
    pub api: String,
    /// Label for streaming (SSE) sessions
    pub sse: String,
}

impl Default for IssuerLabels {
    fn default() -> Self {
        Self {
            api: "api".to_string(),
            sse: "sse".to_string(),
        }
    }
}

impl IssuerLabels {
    /// Label for the given session kind
    pub fn label_for(&self, kind: SessionKind) -> &str {
        match kind {
            SessionKind::Api => &self.api,
            SessionKind::Streaming => &self.sse,
        }
    }
}

/// Signing policy applied to every issued token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIssuerConfig {
    /// Time between issuance and expiry
    pub token_lifetime: Duration,
    /// Issuer labels per usage context
    pub issuer_labels: IssuerLabels,
    /// Roles asserted by every token
    pub default_roles: Vec<String>,
}

impl Default for TokenIssuerConfig {
    fn default() -> Self {
        Self {
            token_lifetime: Duration::days(1),
            issuer_labels: IssuerLabels::default(),
            default_roles: vec![DEFAULT_ROLE.to_string()],
        }
    }
}

impl TokenIssuerConfig {
    /// Set the token lifetime
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    /// Set the issuer labels
    pub fn with_issuer_labels(mut self, api: impl Into<String>, sse: impl Into<String>) -> Self {
        self.issuer_labels = IssuerLabels {
            api: api.into(),
            sse: sse.into(),
        };
        self
    }

    /// Checks the policy can produce well-formed tokens
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Lifetime is positive and at most [`MAX_TOKEN_LIFETIME_DAYS`], both
    ///   labels are non-empty and distinct, and at least one role is granted
    /// * `Err(TokenError::InvalidConfiguration)` - Otherwise
    pub fn validate(&self) -> Result<(), TokenError> {
        if self.token_lifetime <= Duration::zero() {
            return Err(TokenError::InvalidConfiguration {
                message: format!(
                    "token lifetime must be positive, got {}s",
                    self.token_lifetime.num_seconds()
                ),
            });
        }

        if self.token_lifetime > Duration::days(MAX_TOKEN_LIFETIME_DAYS) {
            return Err(TokenError::InvalidConfiguration {
                message: format!(
                    "token lifetime must not exceed {} days, got {}s",
                    MAX_TOKEN_LIFETIME_DAYS,
                    self.token_lifetime.num_seconds()
                ),
            });
        }

        if self.default_roles.is_empty() {
            return Err(TokenError::InvalidConfiguration {
                message: "at least one default role is required".to_string(),
            });
        }

        let labels = &self.issuer_labels;
        if labels.api.is_empty() || labels.sse.is_empty() {
            return Err(TokenError::InvalidConfiguration {
                message: "issuer labels must not be empty".to_string(),
            });
        }
        if labels.api == labels.sse {
            return Err(TokenError::InvalidConfiguration {
                message: format!("issuer labels must differ, both are {:?}", labels.api),
            });
        }

        Ok(())
    }
}

impl From<&TokenConfig> for TokenIssuerConfig {
    fn from(config: &TokenConfig) -> Self {
        Self {
            // values chrono cannot represent become zero and fail validation
            token_lifetime: Duration::try_seconds(config.lifetime_seconds)
                .unwrap_or_else(Duration::zero),
            issuer_labels: IssuerLabels {
                api: config.api_issuer.clone(),
                sse: config.sse_issuer.clone(),
            },
            default_roles: config.default_roles.clone(),
        }
    }
}
