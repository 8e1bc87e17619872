//! Outbound adapters implementing the account repository port.
//!
//! - **persistence**: PostgreSQL via Diesel, used when a database URL is set.
//! - **memory**: process-local store for development and tests.
//!
//! Adapters only translate between domain types and storage; they contain no
//! business rules beyond enforcing email uniqueness atomically.

pub mod memory;
pub mod persistence;
