//! Domain entities representing core business objects.

pub mod identity;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use identity::{Identity, UserId};
pub use token::{Claims, IssuedToken, SessionKind, DEFAULT_ROLE};
