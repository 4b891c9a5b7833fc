//! RS256 private key providers for token signing

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use idt_shared::config::auth::{TokenConfig, DEFAULT_PRIVATE_KEY_PATH};
use jsonwebtoken::EncodingKey;

use crate::errors::KeyError;

/// Capability that supplies the RSA private key used for signing
///
/// Implementations may block on I/O; the issuer calls this once per token
/// and does not retry.
pub trait SigningKeyProvider: Send + Sync {
    /// Returns the current signing key
    fn private_key(&self) -> Result<EncodingKey, KeyError>;
}

impl<T: SigningKeyProvider + ?Sized> SigningKeyProvider for Arc<T> {
    fn private_key(&self) -> Result<EncodingKey, KeyError> {
        (**self).private_key()
    }
}

/// Provider holding a key parsed from an in-memory PEM string
#[derive(Clone)]
pub struct PemKeyProvider {
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for PemKeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PemKeyProvider").finish_non_exhaustive()
    }
}

impl PemKeyProvider {
    /// Creates a provider from PEM-encoded RSA private key bytes
    ///
    /// Accepts both PKCS#1 (`BEGIN RSA PRIVATE KEY`) and PKCS#8
    /// (`BEGIN PRIVATE KEY`) encodings.
    ///
    /// # Returns
    ///
    /// * `Ok(PemKeyProvider)` - Key parsed successfully
    /// * `Err(KeyError::InvalidKey)` - Not a valid RSA private key
    pub fn from_pem(private_key_pem: impl AsRef<[u8]>) -> Result<Self, KeyError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_ref())
            .map_err(|source| KeyError::InvalidKey { source })?;

        Ok(Self { encoding_key })
    }
}

impl SigningKeyProvider for PemKeyProvider {
    fn private_key(&self) -> Result<EncodingKey, KeyError> {
        Ok(self.encoding_key.clone())
    }
}

/// Provider that reads the private key from a PEM file on every call
///
/// Replacing the file on disk takes effect for the next issued token.
#[derive(Debug, Clone)]
pub struct FileKeyProvider {
    private_key_path: PathBuf,
}

impl FileKeyProvider {
    /// Creates a provider for the given PEM file
    ///
    /// The file is not touched until the first key request.
    pub fn new<P: AsRef<Path>>(private_key_path: P) -> Self {
        Self {
            private_key_path: private_key_path.as_ref().to_path_buf(),
        }
    }

    /// Creates a provider from the `JWT_PRIVATE_KEY_PATH` environment variable
    ///
    /// Falls back to `keys/jwt_private_key.pem` when unset.
    pub fn from_env() -> Self {
        let private_key_path = std::env::var("JWT_PRIVATE_KEY_PATH")
            .unwrap_or_else(|_| DEFAULT_PRIVATE_KEY_PATH.to_string());

        Self::new(private_key_path)
    }

    /// Creates a provider for the key path in the token configuration
    pub fn from_config(config: &TokenConfig) -> Self {
        Self::new(&config.private_key_path)
    }

    /// Returns the path to the private key file
    pub fn key_path(&self) -> &Path {
        &self.private_key_path
    }
}

impl SigningKeyProvider for FileKeyProvider {
    fn private_key(&self) -> Result<EncodingKey, KeyError> {
        let private_key_pem = fs::read(&self.private_key_path).map_err(|source| KeyError::Read {
            path: self.private_key_path.clone(),
            source,
        })?;

        EncodingKey::from_rsa_pem(&private_key_pem).map_err(|source| KeyError::InvalidKey { source })
    }
}
