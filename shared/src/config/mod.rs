//! Configuration module
//!
//! - `auth` - Token lifetime, issuer labels, default roles and key location
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};

pub use auth::TokenConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Serializes tests that mutate process environment variables
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Token issuance configuration
    #[serde(default)]
    pub token: TokenConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// `.env` and then the environment specific file (e.g. `.env.production`)
    /// are loaded when present; variables already set in the process
    /// environment take precedence over both.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();

        Self {
            environment,
            token: TokenConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}
