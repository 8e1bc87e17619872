//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only see the driving ports, so
//! tests can swap in mocks without any storage.

use std::sync::Arc;

use crate::domain::ports::{AccountsQuery, LoginService, RegistrationService};

/// Dependency bundle for the account handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn RegistrationService>,
    pub login: Arc<dyn LoginService>,
    pub accounts: Arc<dyn AccountsQuery>,
}

impl HttpState {
    /// Bundle independently supplied ports.
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        login: Arc<dyn LoginService>,
        accounts: Arc<dyn AccountsQuery>,
    ) -> Self {
        Self {
            registration,
            login,
            accounts,
        }
    }

    /// Route every port to one service implementing all three.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use accounts::domain::AccountService;
    /// use accounts::inbound::http::state::HttpState;
    /// use accounts::outbound::memory::InMemoryAccountRepository;
    /// use mockable::DefaultClock;
    ///
    /// let service = AccountService::new(
    ///     Arc::new(InMemoryAccountRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: RegistrationService + LoginService + AccountsQuery + 'static,
    {
        Self {
            registration: service.clone(),
            login: service.clone(),
            accounts: service,
        }
    }
}
