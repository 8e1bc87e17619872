//! Internal Diesel row structs for the `accounts` table.
//!
//! These types never leave the persistence layer. Rows carrying a password do
//! not derive `Debug`.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::accounts;

/// Full account row, read when authenticating.
#[derive(Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Listing projection; the password column is never selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountSummaryRow {
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for new accounts.
#[derive(Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct NewAccountRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub created_at: DateTime<Utc>,
}
