//! Driven port for account storage.
//!
//! Adapters must enforce email uniqueness atomically (for example a UNIQUE
//! index) and report a violation as [`AccountPersistenceError::DuplicateEmail`].
//! The service treats that signal, not its own prior lookup, as authoritative.

use async_trait::async_trait;

use crate::domain::{Account, AccountSummary, EmailAddress};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by account repository adapters.
    pub enum AccountPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "account store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "account store query failed: {message}",
        /// The uniqueness constraint on email rejected an insert.
        DuplicateEmail { email: String } => "an account with email {email} already exists",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fetch the account registered under `email`, using exact matching.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountPersistenceError>;

    /// Persist a new account.
    ///
    /// Fails with [`AccountPersistenceError::DuplicateEmail`] when the email
    /// is already taken, even if a concurrent insert won the race.
    async fn insert(&self, account: &Account) -> Result<(), AccountPersistenceError>;

    /// Scan every account, projected without the password column.
    ///
    /// Returned in the store's natural order; an empty store yields an empty
    /// vector.
    async fn list_summaries(&self) -> Result<Vec<AccountSummary>, AccountPersistenceError>;
}
