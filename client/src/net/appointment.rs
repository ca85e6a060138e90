//! Appointment request model and the simulated submission backend.
//!
//! There is no booking API behind the page yet. [`SimulatedGateway`] stands
//! in for one: it waits the configured delay, logs the request, then
//! succeeds or fails on a fresh random roll.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a [`SubmitError`] variant with a fixed banner text, so
//! the form can show a message without inspecting the cause.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "appointment_test.rs"]
mod appointment_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::settings::PortfolioSettings;
use crate::state::form::Field;

pub const SUCCESS_MESSAGE: &str = "Appointment request sent successfully! We will contact you shortly to confirm.";
pub const INVALID_FORM_MESSAGE: &str = "Please fill in all required fields correctly.";
pub const NETWORK_FAILURE_MESSAGE: &str = "Failed to send appointment request. Please try again or contact us directly.";

const SIMULATED_FAILURE_REASON: &str = "Simulated network error";

/// Preferred visiting window offered by the booking form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    /// Value submitted by the `<select>` option.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning (9 AM - 12 PM)",
            Self::Afternoon => "Afternoon (2 PM - 5 PM)",
            Self::Evening => "Evening (6 PM - 8 PM)",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.code() == code)
    }
}

/// A validated booking, built at submit time and dropped after the round-trip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppointmentRequest {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date: String,
    pub time_slot: TimeSlot,
    pub message: Option<String>,
}

impl AppointmentRequest {
    /// Log line announcing the confirmation mail, when an address was given.
    #[must_use]
    pub fn confirmation_line(&self) -> Option<String> {
        self.email
            .as_deref()
            .map(|email| format!("Confirmation email sent to {} at {email}", self.name))
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<Field>),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{0}")]
    Network(String),
}

impl SubmitError {
    /// User-facing banner text for this failure. A duplicate submit while
    /// one is in flight is ignored, so it has none.
    #[must_use]
    pub fn banner_text(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(_) => Some(INVALID_FORM_MESSAGE),
            Self::InFlight => None,
            Self::Network(_) => Some(NETWORK_FAILURE_MESSAGE),
        }
    }
}

/// Stand-in backend with configurable latency and success probability.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedGateway {
    delay: Duration,
    success_rate: f64,
}

impl SimulatedGateway {
    #[must_use]
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        Self { delay, success_rate: success_rate.clamp(0.0, 1.0) }
    }

    #[must_use]
    pub fn from_settings(settings: &PortfolioSettings) -> Self {
        Self::new(settings.submit_delay(), settings.success_rate)
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Outcome for a uniform roll in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Network`] when `roll` falls outside the success band.
    pub fn outcome(&self, roll: f64) -> Result<(), SubmitError> {
        if roll < self.success_rate {
            Ok(())
        } else {
            Err(SubmitError::Network(SIMULATED_FAILURE_REASON.to_owned()))
        }
    }

    /// Simulate delivering `request`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Network`] on a simulated failure.
    pub async fn send(&self, request: &AppointmentRequest) -> Result<(), SubmitError> {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(self.delay).await;

        match serde_json::to_string(request) {
            Ok(data) => log::info!("Appointment data: {data}"),
            Err(e) => log::warn!("Appointment data not serializable: {e}"),
        }
        self.outcome(random_roll())
    }
}

/// Fresh roll per call; deterministic zero off-browser.
fn random_roll() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
