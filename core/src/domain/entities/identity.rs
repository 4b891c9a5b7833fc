//! Identity of an authenticated user.

use serde::{Deserialize, Serialize};

/// Anything that can name the user a token is issued for
///
/// The account model lives outside this crate; callers implement this for
/// their own user type. The identifier is copied into the token verbatim.
pub trait Identity {
    /// Unique user identifier
    fn id(&self) -> i64;
}

/// Bare user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl Identity for UserId {
    fn id(&self) -> i64 {
        self.0
    }
}

impl Identity for i64 {
    fn id(&self) -> i64 {
        *self
    }
}

impl<T: Identity + ?Sized> Identity for &T {
    fn id(&self) -> i64 {
        (**self).id()
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
