use futures::executor::block_on;

use super::*;
use crate::state::form::FormState;

fn request() -> AppointmentRequest {
    AppointmentRequest {
        name: "Jane".to_owned(),
        phone: "0123".to_owned(),
        email: Some("jane@example.com".to_owned()),
        date: "2024-01-02".to_owned(),
        time_slot: TimeSlot::Evening,
        message: None,
    }
}

// =============================================================
// TimeSlot
// =============================================================

#[test]
fn time_slot_codes_round_trip() {
    for slot in TimeSlot::ALL {
        assert_eq!(TimeSlot::from_code(slot.code()), Some(slot));
    }
    assert_eq!(TimeSlot::from_code(""), None);
    assert_eq!(TimeSlot::from_code("Morning"), None);
}

#[test]
fn time_slot_labels_are_human_readable() {
    assert_eq!(TimeSlot::Morning.label(), "Morning (9 AM - 12 PM)");
    assert_eq!(TimeSlot::Afternoon.label(), "Afternoon (2 PM - 5 PM)");
    assert_eq!(TimeSlot::Evening.label(), "Evening (6 PM - 8 PM)");
}

#[test]
fn request_serializes_with_lowercase_slot() {
    let json = serde_json::to_value(request()).unwrap();
    assert_eq!(json["time_slot"], "evening");
    assert_eq!(json["message"], serde_json::Value::Null);
}

#[test]
fn confirmation_line_only_with_email() {
    assert_eq!(
        request().confirmation_line().as_deref(),
        Some("Confirmation email sent to Jane at jane@example.com")
    );
    let no_email = AppointmentRequest { email: None, ..request() };
    assert_eq!(no_email.confirmation_line(), None);
}

// =============================================================
// SimulatedGateway
// =============================================================

#[test]
fn outcome_succeeds_below_success_rate() {
    let gateway = SimulatedGateway::new(Duration::ZERO, 0.9);
    assert_eq!(gateway.outcome(0.0), Ok(()));
    assert_eq!(gateway.outcome(0.89), Ok(()));
    assert_eq!(gateway.outcome(0.9), Err(SubmitError::Network("Simulated network error".to_owned())));
    assert!(gateway.outcome(0.99).is_err());
}

#[test]
fn success_rate_is_clamped() {
    assert_eq!(SimulatedGateway::new(Duration::ZERO, 7.0).outcome(0.999), Ok(()));
    assert!(SimulatedGateway::new(Duration::ZERO, -1.0).outcome(0.0).is_err());
}

#[test]
fn from_settings_copies_delay_and_rate() {
    let settings = PortfolioSettings { submit_delay_ms: 250, success_rate: 0.5, ..PortfolioSettings::default() };
    let gateway = SimulatedGateway::from_settings(&settings);
    assert_eq!(gateway.delay(), Duration::from_millis(250));
    assert!(gateway.outcome(0.49).is_ok());
    assert!(gateway.outcome(0.5).is_err());
}

#[test]
fn network_error_has_distinct_banner_text() {
    let err = SubmitError::Network("boom".to_owned());
    assert_eq!(err.banner_text(), Some(NETWORK_FAILURE_MESSAGE));
    assert_ne!(err.banner_text(), SubmitError::Invalid(Vec::new()).banner_text());
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn send_respects_certain_outcomes() {
    let always = SimulatedGateway::new(Duration::ZERO, 1.0);
    let never = SimulatedGateway::new(Duration::ZERO, 0.0);
    assert_eq!(block_on(always.send(&request())), Ok(()));
    assert!(matches!(block_on(never.send(&request())), Err(SubmitError::Network(_))));
}

// =============================================================
// Full round-trip through the form state
// =============================================================

fn ready_form() -> FormState {
    let mut form = FormState::default();
    form.apply_date_defaults("2024-01-01".to_owned(), "2024-01-02".to_owned());
    form.on_input(Field::Name, "Jane".to_owned());
    form.on_input(Field::Phone, "0123".to_owned());
    form.on_input(Field::Time, "evening".to_owned());
    form
}

#[test]
fn successful_round_trip_resets_the_form() {
    let gateway = SimulatedGateway::new(Duration::ZERO, 1.0);
    let mut form = ready_form();

    let request = form.start_submission().unwrap();
    let result = block_on(gateway.send(&request));
    form.finish_submission(result.is_ok(), "2024-01-09".to_owned());

    assert!(result.is_ok());
    assert!(!form.is_submitting());
    assert_eq!(form.value(Field::Name), "");
    assert_eq!(form.value(Field::Date), "2024-01-09");
}

#[test]
fn failed_round_trip_restores_submit_but_keeps_input() {
    let gateway = SimulatedGateway::new(Duration::ZERO, 0.0);
    let mut form = ready_form();

    let request = form.start_submission().unwrap();
    let result = block_on(gateway.send(&request));
    form.finish_submission(result.is_ok(), "2024-01-09".to_owned());

    assert_eq!(result.map_err(|e| e.banner_text()), Err(Some(NETWORK_FAILURE_MESSAGE)));
    assert!(!form.is_submitting());
    assert_eq!(form.value(Field::Name), "Jane");
}

#[test]
fn invalid_form_never_reaches_the_gateway() {
    let mut form = FormState::default();
    let err = form.start_submission().unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(ref fields) if fields.len() == 4));
    assert!(!form.is_submitting());
}
