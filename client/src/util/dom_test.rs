#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn measurements_are_neutral_without_a_dom() {
    assert!(scroll_y().abs() < f64::EPSILON);
    assert!(viewport_width().abs() < f64::EPSILON);
    assert!(navbar_height().abs() < f64::EPSILON);
    assert!(measure_sections().is_empty());
}

#[test]
fn smooth_scroll_reports_missing_target() {
    assert!(!smooth_scroll_to("about", "#about"));
}

#[test]
fn location_helpers_are_empty_without_a_dom() {
    assert_eq!(current_url(), "");
    assert_eq!(iso_timestamp(), "");
}

#[test]
fn body_mutators_are_noop_but_callable() {
    set_scroll_lock(true);
    set_scroll_lock(false);
    set_body_class(LOADED_CLASS, true);
    scroll_into_view("form-message");
}
