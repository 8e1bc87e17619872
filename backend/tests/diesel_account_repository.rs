//! Integration tests for `DieselAccountRepository` against embedded PostgreSQL.
//!
//! Opt-in: run with `RUN_PG_EMBEDDED=1 cargo test -- --ignored`.

use accounts::domain::ports::{AccountPersistenceError, AccountRepository};
use accounts::domain::{Account, AccountId, AccountName, EmailAddress, Password};
use accounts::outbound::persistence::{
    DbPool, DieselAccountRepository, PoolConfig, run_pending_migrations,
};
use chrono::{DateTime, TimeZone, Utc};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{embedded_postgres_enabled, handle_cluster_setup_failure, reset_database};

const TEST_DB: &str = "diesel_account_repository_test";

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    repository: DieselAccountRepository,
}

impl TestContext {
    fn block_on<F: std::future::Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    reset_database(&cluster.connection().database_url("postgres"), TEST_DB)?;

    let database_url = cluster.connection().database_url(TEST_DB);
    run_pending_migrations(&database_url).map_err(|err| err.to_string())?;

    let pool = runtime
        .block_on(DbPool::new(PoolConfig::new(&database_url).with_max_size(2)))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        repository: DieselAccountRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    if !embedded_postgres_enabled() {
        eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
        return None;
    }
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn created_at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, minute, 0)
        .single()
        .expect("valid timestamp")
}

fn account(name: &str, email: &str, password: &str, minute: u32) -> Account {
    Account::new(
        AccountId::random(),
        AccountName::new(name).expect("name"),
        EmailAddress::new(email).expect("email"),
        Password::new(password).expect("password"),
        created_at(minute),
    )
}

#[rstest]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn inserted_account_is_found_by_exact_email(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let ann = account("Ann", "ann@x.com", "pw1", 30);

    context
        .block_on(context.repository.insert(&ann))
        .expect("insert account");

    let found = context
        .block_on(context.repository.find_by_email(ann.email()))
        .expect("query account")
        .expect("account should exist");
    assert_eq!(found.id(), ann.id());
    assert_eq!(found.name(), ann.name());
    assert!(found.password().matches("pw1"));
    assert_eq!(found.created_at(), ann.created_at());

    let other_case = EmailAddress::new("ANN@x.com").expect("email");
    let missing = context
        .block_on(context.repository.find_by_email(&other_case))
        .expect("query account");
    assert!(missing.is_none());
}

#[rstest]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn unique_constraint_reports_duplicate_email(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    context
        .block_on(context.repository.insert(&account("Ann", "ann@x.com", "pw1", 30)))
        .expect("first insert");

    let err = context
        .block_on(context.repository.insert(&account("Ann2", "ann@x.com", "pw9", 31)))
        .expect_err("second insert must fail");
    assert_eq!(
        err,
        AccountPersistenceError::duplicate_email("ann@x.com".to_owned())
    );

    let summaries = context
        .block_on(context.repository.list_summaries())
        .expect("list accounts");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name.as_ref(), "Ann");
}

#[rstest]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn summaries_follow_creation_order(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    for (name, email, minute) in [("Bob", "bob@x.com", 45), ("Ann", "ann@x.com", 30)] {
        context
            .block_on(context.repository.insert(&account(name, email, "pw", minute)))
            .expect("insert account");
    }

    let summaries = context
        .block_on(context.repository.list_summaries())
        .expect("list accounts");
    let listed: Vec<(&str, DateTime<Utc>)> = summaries
        .iter()
        .map(|summary| (summary.name.as_ref(), summary.created_at))
        .collect();
    assert_eq!(listed, [("Ann", created_at(30)), ("Bob", created_at(45))]);
}
