//! In-memory account store.
//!
//! Accounts live in insertion order behind a `RwLock`. The uniqueness check
//! and the push happen under one write guard, so concurrent registrations for
//! the same email cannot both succeed.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{AccountPersistenceError, AccountRepository};
use crate::domain::{Account, AccountSummary, EmailAddress};

/// Process-local implementation of the `AccountRepository` port.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

fn poisoned<T>(_: PoisonError<T>) -> AccountPersistenceError {
    AccountPersistenceError::query("in-memory account store lock poisoned")
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts
            .iter()
            .find(|account| account.email() == email)
            .cloned())
    }

    async fn insert(&self, account: &Account) -> Result<(), AccountPersistenceError> {
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        if accounts
            .iter()
            .any(|existing| existing.email() == account.email())
        {
            return Err(AccountPersistenceError::duplicate_email(
                account.email().as_ref(),
            ));
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn list_summaries(&self) -> Result<Vec<AccountSummary>, AccountPersistenceError> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.iter().map(Account::summary).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{AccountId, AccountName, Password};

    fn account(name: &str, email: &str) -> Account {
        Account::new(
            AccountId::random(),
            AccountName::new(name).expect("name"),
            EmailAddress::new(email).expect("email"),
            Password::new("pw1").expect("password"),
            Utc::now(),
        )
    }

    #[fixture]
    fn repo() -> InMemoryAccountRepository {
        InMemoryAccountRepository::default()
    }

    #[rstest]
    #[tokio::test]
    async fn inserted_accounts_are_found_by_exact_email(repo: InMemoryAccountRepository) {
        let ann = account("Ann", "ann@x.com");
        repo.insert(&ann).await.expect("insert succeeds");

        let found = repo
            .find_by_email(&EmailAddress::new("ann@x.com").expect("email"))
            .await
            .expect("lookup succeeds");
        assert_eq!(found, Some(ann));

        let other_case = repo
            .find_by_email(&EmailAddress::new("Ann@x.com").expect("email"))
            .await
            .expect("lookup succeeds");
        assert_eq!(other_case, None);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_insert_is_rejected_and_not_stored(repo: InMemoryAccountRepository) {
        repo.insert(&account("Ann", "ann@x.com"))
            .await
            .expect("first insert succeeds");

        let err = repo
            .insert(&account("Ann2", "ann@x.com"))
            .await
            .expect_err("duplicate rejected");
        assert_eq!(err, AccountPersistenceError::duplicate_email("ann@x.com"));
        assert_eq!(repo.list_summaries().await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn summaries_keep_insertion_order(repo: InMemoryAccountRepository) {
        for (name, email) in [("Ann", "ann@x.com"), ("Bob", "bob@x.com"), ("Cy", "cy@x.com")] {
            repo.insert(&account(name, email)).await.expect("insert");
        }

        let names: Vec<String> = repo
            .list_summaries()
            .await
            .expect("list")
            .into_iter()
            .map(|summary| summary.name.as_ref().to_owned())
            .collect();
        assert_eq!(names, ["Ann", "Bob", "Cy"]);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_for_one_email_admit_exactly_one() {
        let repo = std::sync::Arc::new(InMemoryAccountRepository::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(&account(&format!("Ann{i}"), "ann@x.com")).await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.expect("task completes").is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }
}
