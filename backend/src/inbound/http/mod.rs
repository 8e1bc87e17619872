//! HTTP inbound adapter exposing the account endpoints.

pub mod accounts;
pub mod envelope;
pub mod error;
pub mod health;
pub mod state;
