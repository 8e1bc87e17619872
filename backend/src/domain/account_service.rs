//! Account domain service.
//!
//! [`AccountService`] implements the registration, login and listing driving
//! ports over an injected [`AccountRepository`]. It keeps no state between
//! calls; every operation re-queries the store, and every store call is
//! bounded by a timeout that surfaces as [`ErrorCode::StoreError`].
//!
//! [`ErrorCode::StoreError`]: crate::domain::ErrorCode::StoreError

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    AccountPersistenceError, AccountRepository, AccountsQuery, LoginService, RegistrationService,
};
use crate::domain::{
    Account, AccountId, AccountProfile, AccountSummary, EmailAddress, Error, LoginCredentials,
    Registration,
};

/// Default bound applied to each store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

fn map_persistence_error(error: AccountPersistenceError) -> Error {
    match error {
        AccountPersistenceError::DuplicateEmail { email } => {
            Error::duplicate_email(format!("an account with email {email} already exists"))
        }
        other @ (AccountPersistenceError::Connection { .. }
        | AccountPersistenceError::Query { .. }) => Error::store(other.to_string()),
    }
}

/// Account service implementing the registration, login and listing ports.
pub struct AccountService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    store_timeout: Duration,
}

// Manual impl so cloning does not require `R: Clone`.
impl<R> Clone for AccountService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            store_timeout: self.store_timeout,
        }
    }
}

impl<R> AccountService<R> {
    /// Create a service over `repository`, stamping `createdAt` from `clock`.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use accounts::domain::AccountService;
    /// # use accounts::outbound::memory::InMemoryAccountRepository;
    /// # use mockable::DefaultClock;
    /// let service = AccountService::new(
    ///     Arc::new(InMemoryAccountRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Override the per-call store timeout.
    #[must_use]
    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Per-call store timeout in effect.
    pub fn store_timeout(&self) -> Duration {
        self.store_timeout
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, AccountPersistenceError>>,
    {
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(result) => result.map_err(map_persistence_error),
            Err(_) => {
                let millis = self.store_timeout.as_millis();
                warn!(operation, timeout_ms = %millis, "account store call timed out");
                Err(Error::store(format!("account store timed out after {millis}ms")))
            }
        }
    }
}

#[async_trait]
impl<R> RegistrationService for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, registration: &Registration) -> Result<(), Error> {
        let email = registration.email();
        let existing = self
            .bounded("find_by_email", self.repository.find_by_email(email))
            .await?;
        if existing.is_some() {
            debug!(%email, "registration rejected: email already registered");
            return Err(Error::duplicate_email(format!(
                "an account with email {email} already exists"
            )));
        }

        let account = Account::new(
            AccountId::random(),
            registration.name().clone(),
            email.clone(),
            registration.password().clone(),
            self.clock.utc(),
        );

        // A lost race surfaces here as DuplicateEmail from the store.
        self.bounded("insert", self.repository.insert(&account)).await?;

        info!(account_id = %account.id(), %email, "account registered");
        Ok(())
    }
}

#[async_trait]
impl<R> LoginService for AccountService<R>
where
    R: AccountRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AccountProfile, Error> {
        // Registration never stores an empty email, so it cannot match.
        let Ok(email) = EmailAddress::new(credentials.email()) else {
            debug!("login rejected: empty email");
            return Err(Error::not_found("no account registered for an empty email"));
        };
        let account = self
            .bounded("find_by_email", self.repository.find_by_email(&email))
            .await?
            .ok_or_else(|| Error::not_found(format!("no account registered for {email}")))?;

        if !account.password().matches(credentials.password()) {
            debug!(%email, "login rejected: password mismatch");
            return Err(Error::wrong_password("password does not match"));
        }

        Ok(account.profile())
    }
}

#[async_trait]
impl<R> AccountsQuery for AccountService<R>
where
    R: AccountRepository,
{
    async fn list_accounts(&self) -> Result<Vec<AccountSummary>, Error> {
        self.bounded("list_summaries", self.repository.list_summaries()).await
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
