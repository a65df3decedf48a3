//! `social-server` binary: load settings, install logging, serve HTTP until
//! Ctrl-C.

use anyhow::{Context, Result};

use social_server::config::Settings;
use social_server::startup::Application;
use social_server::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load().context("failed to load configuration")?;
    telemetry::init_tracing(&settings);

    tracing::info!(
        addr = %settings.server_addr(),
        environment = %settings.environment,
        in_memory = settings.database.is_in_memory(),
        "Starting social server"
    );

    Application::build(settings)
        .await?
        .run_until_stopped()
        .await
}
