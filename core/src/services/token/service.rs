//! Token issuer implementation

use jsonwebtoken::{encode, Algorithm, Header};

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{Claims, IssuedToken, SessionKind};
use crate::errors::TokenError;

use super::clock::{Clock, SystemClock};
use super::config::TokenIssuerConfig;
use super::key_provider::SigningKeyProvider;

/// Issues RS256-signed identity tokens
///
/// Holds no mutable state; share it freely between request handlers.
#[derive(Debug)]
pub struct TokenIssuer<K, C = SystemClock> {
    key_provider: K,
    clock: C,
    config: TokenIssuerConfig,
}

impl<K: SigningKeyProvider> TokenIssuer<K, SystemClock> {
    /// Creates a new issuer using the system clock
    ///
    /// # Arguments
    ///
    /// * `key_provider` - Source of the RSA private key
    /// * `config` - Signing policy
    ///
    /// # Returns
    ///
    /// A new `TokenIssuer` or `TokenError::InvalidConfiguration`
    pub fn new(key_provider: K, config: TokenIssuerConfig) -> Result<Self, TokenError> {
        Self::with_clock(key_provider, SystemClock, config)
    }
}

impl<K: SigningKeyProvider, C: Clock> TokenIssuer<K, C> {
    /// Creates a new issuer with an explicit clock
    pub fn with_clock(key_provider: K, clock: C, config: TokenIssuerConfig) -> Result<Self, TokenError> {
        config.validate()?;

        Ok(Self {
            key_provider,
            clock,
            config,
        })
    }

    /// Signing policy in use
    pub fn config(&self) -> &TokenIssuerConfig {
        &self.config
    }

    /// Generates a signed token for `identity`
    ///
    /// # Arguments
    ///
    /// * `identity` - The authenticated user
    /// * `for_streaming` - `true` for event-stream connections, `false` for API sessions
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Expiry and compact encoded token
    /// * `Err(TokenError::KeyUnavailable)` - The key provider failed
    /// * `Err(TokenError::ExpiryOutOfRange)` - The clock plus lifetime cannot be represented
    /// * `Err(TokenError::SigningError)` - The signature could not be produced
    pub fn generate<I>(&self, identity: &I, for_streaming: bool) -> Result<IssuedToken, TokenError>
    where
        I: Identity + ?Sized,
    {
        self.issue(identity, SessionKind::from(for_streaming))
    }

    /// Generates a signed token for `identity` in the given session kind
    pub fn issue<I>(&self, identity: &I, kind: SessionKind) -> Result<IssuedToken, TokenError>
    where
        I: Identity + ?Sized,
    {
        let uid = identity.id();

        let key = self.key_provider.private_key().map_err(|source| {
            tracing::error!(uid, error = %source, "signing key unavailable");
            TokenError::KeyUnavailable { source }
        })?;

        let issued_at = self.clock.now();
        let lifetime = self.config.token_lifetime;
        let claims = Claims::new(
            uid,
            self.config.default_roles.clone(),
            issued_at,
            lifetime,
            self.config.issuer_labels.label_for(kind),
        )
        .ok_or_else(|| {
            tracing::error!(
                uid,
                issued_at = %issued_at,
                lifetime_seconds = lifetime.num_seconds(),
                "token expiry out of range"
            );
            TokenError::ExpiryOutOfRange {
                issued_at: issued_at.timestamp(),
                lifetime_seconds: lifetime.num_seconds(),
            }
        })?;

        let token = encode(&Header::new(Algorithm::RS256), &claims, &key).map_err(|source| {
            tracing::error!(uid, issuer = %claims.iss, error = %source, "JWTError: error signing token");
            TokenError::SigningError { source }
        })?;

        tracing::debug!(
            uid,
            issuer = %claims.iss,
            expires = claims.exp,
            lifetime_seconds = claims.lifetime_seconds(),
            "issued identity token"
        );

        Ok(IssuedToken {
            expires: claims.exp,
            token,
        })
    }
}
