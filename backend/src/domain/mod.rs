//! Domain primitives, services and ports.
//!
//! Purpose: define the account model and the use-cases that operate on it,
//! independent of HTTP and storage. Inbound adapters call the driving ports
//! in [`ports`]; outbound adapters implement [`ports::AccountRepository`].
//!
//! Public surface:
//! - Error / ErrorCode: failure payload and its stable identifier.
//! - Account and its value types (AccountId, AccountName, EmailAddress,
//!   Password) plus the password-free AccountProfile and AccountSummary.
//! - Registration: presence-checked sign-up input; LoginCredentials: raw
//!   login input checked only by lookup.
//! - AccountService: the use-case implementation over a repository.
//! - TraceId: per-request correlation identifier.

mod account;
mod account_service;
mod auth;
pub mod error;
pub mod ports;
mod trace_id;

pub use self::account::{
    Account, AccountId, AccountName, AccountProfile, AccountSummary, AccountValidationError,
    EmailAddress, Password,
};
pub use self::account_service::{AccountService, DEFAULT_STORE_TIMEOUT};
pub use self::auth::{LoginCredentials, Registration};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
