//! Runtime settings shared between the server render and the hydrated page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds [`PortfolioSettings`] from its environment and embeds
//! them as JSON in the HTML shell. On hydration the client reads the same
//! element back, so both sides agree on the simulated-submission knobs and
//! the WhatsApp number without a separate request.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// DOM id of the `<script type="application/json">` carrying the settings.
pub const SETTINGS_ELEMENT_ID: &str = "portfolio-settings";

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;
pub const DEFAULT_WHATSAPP_NUMBER: &str = "8801856030508";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("success rate must be within 0.0..=1.0, got {0}")]
    SuccessRate(f64),
    #[error("whatsapp number must be non-empty digits, got {0:?}")]
    WhatsappNumber(String),
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Knobs for the appointment flow and contact links.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSettings {
    /// Simulated round-trip latency of an appointment submission.
    pub submit_delay_ms: u64,
    /// Probability in `0.0..=1.0` that a simulated submission succeeds.
    pub success_rate: f64,
    /// International number (digits only) used for `wa.me` deep links.
    pub whatsapp_number: String,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            success_rate: DEFAULT_SUCCESS_RATE,
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_owned(),
        }
    }
}

impl PortfolioSettings {
    /// Check value ranges, returning the settings unchanged when they hold.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] for an out-of-range success rate or a
    /// WhatsApp number that is empty or contains non-digits.
    pub fn validate(self) -> Result<Self, SettingsError> {
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(SettingsError::SuccessRate(self.success_rate));
        }
        if self.whatsapp_number.is_empty() || !self.whatsapp_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SettingsError::WhatsappNumber(self.whatsapp_number));
        }
        Ok(self)
    }

    /// Parse and validate settings from their embedded JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] for malformed JSON and the
    /// [`validate`](Self::validate) errors otherwise.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        let parsed: Self = serde_json::from_str(raw)?;
        parsed.validate()
    }

    /// JSON form safe to place inside a `<script>` element.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace("</", "<\\/")
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Read the settings embedded by the server render.
    ///
    /// Falls back to defaults (with a warning) when the element is missing
    /// or its content does not parse.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw.as_deref().map(Self::from_json) {
                Some(Ok(settings)) => settings,
                Some(Err(e)) => {
                    log::warn!("ignoring embedded settings: {e}");
                    Self::default()
                }
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
