//! Wiring from server configuration to handler state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::{info, warn};

use accounts::domain::AccountService;
use accounts::domain::ports::AccountRepository;
use accounts::inbound::http::state::HttpState;
use accounts::outbound::memory::InMemoryAccountRepository;
use accounts::outbound::persistence::DieselAccountRepository;

use super::ServerConfig;

fn service_state<R>(repository: R, config: &ServerConfig) -> HttpState
where
    R: AccountRepository + 'static,
{
    let service = AccountService::new(Arc::new(repository), Arc::new(DefaultClock))
        .with_store_timeout(config.store_timeout);
    HttpState::from_service(Arc::new(service))
}

/// Build handler state over PostgreSQL when a pool is configured, otherwise
/// over a process-local store.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("account store: postgres");
            service_state(DieselAccountRepository::new(pool.clone()), config)
        }
        None => {
            warn!("no database configured; accounts are kept in memory and lost on restart");
            service_state(InMemoryAccountRepository::default(), config)
        }
    };
    web::Data::new(state)
}
