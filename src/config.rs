//! Server configuration parsed from environment variables.
//!
//! Optional (defaults in parentheses):
//! - `PORT` (3000)
//! - `SUBMIT_DELAY_MS` (1500): simulated submission latency
//! - `SUBMIT_SUCCESS_RATE` (0.9): probability in `0.0..=1.0`
//! - `WHATSAPP_NUMBER` (8801856030508): digits only
//!
//! Blank values count as unset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use client::settings::{DEFAULT_SUBMIT_DELAY_MS, DEFAULT_SUCCESS_RATE, DEFAULT_WHATSAPP_NUMBER, PortfolioSettings};

use crate::error::SiteError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub port: u16,
    /// Embedded into every rendered page for the client.
    pub settings: PortfolioSettings,
}

impl SiteConfig {
    /// Build the config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidEnv`] for unparsable numbers and
    /// [`SiteError::Settings`] for out-of-range settings.
    pub fn from_env() -> Result<Self, SiteError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SiteError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let settings = PortfolioSettings {
            submit_delay_ms: parse_or(&lookup, "SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS)?,
            success_rate: parse_or(&lookup, "SUBMIT_SUCCESS_RATE", DEFAULT_SUCCESS_RATE)?,
            whatsapp_number: non_blank(&lookup, "WHATSAPP_NUMBER").unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_owned()),
        }
        .validate()?;
        Ok(Self { port, settings })
    }
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, SiteError> {
    match non_blank(lookup, key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| SiteError::InvalidEnv { key, value: raw }),
    }
}
