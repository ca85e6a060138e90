//! `clinic-site`: serves the server-rendered dental portfolio page.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::SiteError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "clinic-site failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), SiteError> {
    let config = SiteConfig::from_env()?;
    tracing::info!(
        submit_delay_ms = config.settings.submit_delay_ms,
        success_rate = config.settings.success_rate,
        whatsapp_number = %config.settings.whatsapp_number,
        "configuration loaded"
    );

    let app = routes::app(config.settings)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "clinic-site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
