//! Accounts server entry point: loads settings, prepares the account store
//! and runs the HTTP listener.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use accounts::inbound::http::health::HealthState;
use accounts::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{AppSettings, ServerConfig, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let config = build_server_config(&settings).await?;
    let bind_addr = config.bind_addr();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "accounts server listening");

    server.await.wrap_err("server terminated with an error")?;
    health_state.mark_unhealthy();
    Ok(())
}

async fn build_server_config(settings: &AppSettings) -> Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr())
        .with_store_timeout(settings.store_timeout())
        .with_cors_allowed_origins(settings.cors_allowed_origins());

    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };

    let migration_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .wrap_err("migration task panicked")?
        .wrap_err("failed to migrate account store")?;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size()))
        .await
        .wrap_err("failed to build database pool")?;
    Ok(config.with_db_pool(pool))
}
