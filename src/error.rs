//! Startup errors of the site server.

use client::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
