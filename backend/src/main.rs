//! Employee records service entry point: loads settings, prepares storage and
//! serves the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employees::inbound::http::health::HealthState;
use employees::outbound::persistence::{DbPool, run_migrations};
use server::{ServerConfig, ServerSettings, create_server};

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServerSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let mut config = ServerConfig::new(settings.host(), settings.port);

    if let Some(pool_config) = settings.pool_config() {
        let url = pool_config.database_url().to_owned();
        let applied = tokio::task::spawn_blocking(move || run_migrations(&url))
            .await
            .wrap_err("migration task panicked")?
            .wrap_err("failed to apply database migrations")?;
        info!(applied, "database schema up to date");

        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await?;
    Ok(())
}
