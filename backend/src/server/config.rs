//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use accounts::domain::DEFAULT_STORE_TIMEOUT;
use accounts::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) store_timeout: Duration,
    pub(crate) cors_allowed_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// In-memory store, default store timeout, any CORS origin.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            store_timeout: DEFAULT_STORE_TIMEOUT,
            cors_allowed_origins: None,
        }
    }

    /// Persist accounts in PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Bound each account store call by `timeout`.
    #[must_use]
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Restrict CORS to `origins`; `None` allows any origin.
    #[must_use]
    pub fn with_cors_allowed_origins(mut self, origins: Option<Vec<String>>) -> Self {
        self.cors_allowed_origins = origins;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn builders_record_overrides() {
        let addr: SocketAddr = "127.0.0.1:3000".parse().expect("addr");
        let config = ServerConfig::new(addr)
            .with_store_timeout(Duration::from_millis(100))
            .with_cors_allowed_origins(Some(vec!["http://a.test".to_owned()]));

        assert_eq!(config.bind_addr(), addr);
        assert!(config.db_pool.is_none());
        assert_eq!(config.store_timeout, Duration::from_millis(100));
        assert_eq!(
            config.cors_allowed_origins.as_deref(),
            Some(&["http://a.test".to_owned()][..])
        );
    }
}
