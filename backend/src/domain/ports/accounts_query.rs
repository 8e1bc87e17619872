//! Driving port for account listings.

use async_trait::async_trait;

use crate::domain::{AccountSummary, Error};

/// Domain use-case port for listing accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsQuery: Send + Sync {
    /// Return every account without passwords.
    async fn list_accounts(&self) -> Result<Vec<AccountSummary>, Error>;
}
