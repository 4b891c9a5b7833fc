//! Business services containing domain logic.

pub mod token;

// Re-export commonly used types
pub use token::{
    Clock, FileKeyProvider, FixedClock, IssuerLabels, PemKeyProvider, SigningKeyProvider,
    SystemClock, TokenIssuer, TokenIssuerConfig,
};
