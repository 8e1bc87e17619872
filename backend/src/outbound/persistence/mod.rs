//! PostgreSQL persistence for accounts using Diesel.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private;
//! only the repository, the pool and the migration entry point are exported.
//! Connections come from a `bb8` pool over `diesel-async`.
//!
//! ```ignore
//! use accounts::outbound::persistence::{DbPool, DieselAccountRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/accounts")).await?;
//! let repo = DieselAccountRepository::new(pool);
//! ```

mod diesel_account_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
