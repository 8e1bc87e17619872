//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! check credentials without knowing the backing store, so HTTP handler tests
//! can substitute a double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{AccountProfile, Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the matching account's profile.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AccountProfile, Error>;
}
