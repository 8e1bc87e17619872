//! PostgreSQL-backed `AccountRepository` implementation using Diesel.
//!
//! Email uniqueness is enforced by the `accounts_email_key` constraint, so a
//! concurrent duplicate insert surfaces as a unique violation and is reported
//! as [`AccountPersistenceError::DuplicateEmail`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{AccountPersistenceError, AccountRepository};
use crate::domain::{
    Account, AccountId, AccountName, AccountSummary, AccountValidationError, EmailAddress, Password,
};

use super::models::{AccountRow, AccountSummaryRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

/// Diesel-backed implementation of the `AccountRepository` port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            AccountPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to account persistence errors.
///
/// `email` is only consulted for unique violations, which only inserts raise.
fn map_diesel_error(error: diesel::result::Error, email: &str) -> AccountPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            AccountPersistenceError::duplicate_email(email)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            AccountPersistenceError::connection(format!(
                "database connection error: {}",
                info.message()
            ))
        }
        DieselError::DatabaseError(_, info) => {
            AccountPersistenceError::query(format!("database error: {}", info.message()))
        }
        DieselError::QueryBuilderError(_) => AccountPersistenceError::query("database query error"),
        _ => AccountPersistenceError::query("database error"),
    }
}

fn corrupt_row(error: AccountValidationError) -> AccountPersistenceError {
    AccountPersistenceError::query(format!(
        "stored account has invalid {}: {error}",
        error.field()
    ))
}

fn row_to_account(row: AccountRow) -> Result<Account, AccountPersistenceError> {
    Ok(Account::new(
        AccountId::from_uuid(row.id),
        AccountName::new(row.name).map_err(corrupt_row)?,
        EmailAddress::new(row.email).map_err(corrupt_row)?,
        Password::new(row.password).map_err(corrupt_row)?,
        row.created_at,
    ))
}

fn row_to_summary(row: AccountSummaryRow) -> Result<AccountSummary, AccountPersistenceError> {
    Ok(AccountSummary {
        name: AccountName::new(row.name).map_err(corrupt_row)?,
        email: EmailAddress::new(row.email).map_err(corrupt_row)?,
        created_at: row.created_at,
    })
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = accounts::table
            .filter(accounts::email.eq(email.as_ref()))
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, email.as_ref()))?;

        row.map(row_to_account).transpose()
    }

    async fn insert(&self, account: &Account) -> Result<(), AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAccountRow {
            id: *account.id().as_uuid(),
            name: account.name().as_ref(),
            email: account.email().as_ref(),
            password: account.password().expose(),
            created_at: account.created_at(),
        };

        diesel::insert_into(accounts::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, account.email().as_ref()))?;

        Ok(())
    }

    async fn list_summaries(&self) -> Result<Vec<AccountSummary>, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AccountSummaryRow> = accounts::table
            .order((accounts::created_at.asc(), accounts::id.asc()))
            .select(AccountSummaryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, ""))?;

        rows.into_iter().map(row_to_summary).collect()
    }
}
