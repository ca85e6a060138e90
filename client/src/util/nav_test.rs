use super::*;

fn page() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 600.0),
        SectionBounds::new("about", 600.0, 500.0),
        SectionBounds::new("services", 1100.0, 800.0),
    ]
}

// =============================================================
// compute_active_section
// =============================================================

#[test]
fn top_of_page_highlights_first_section() {
    // 0 + 70 + 100 = 170 lies inside home.
    assert_eq!(compute_active_section(0.0, 70.0, &page()), Some("home"));
}

#[test]
fn position_inside_single_section_returns_it() {
    // 500 + 70 + 100 = 670 lies inside about.
    assert_eq!(compute_active_section(500.0, 70.0, &page()), Some("about"));
}

#[test]
fn section_top_is_inclusive_and_bottom_exclusive() {
    // Exactly 600 belongs to about, not home.
    assert_eq!(compute_active_section(430.0, 70.0, &page()), Some("about"));
    // Exactly 1100 belongs to services.
    assert_eq!(compute_active_section(930.0, 70.0, &page()), Some("services"));
}

#[test]
fn position_past_last_section_returns_none() {
    assert_eq!(compute_active_section(5000.0, 70.0, &page()), None);
}

#[test]
fn empty_page_has_no_active_section() {
    assert_eq!(compute_active_section(0.0, 70.0, &[]), None);
}

#[test]
fn overlapping_sections_prefer_the_later_one() {
    let sections = vec![
        SectionBounds::new("hero", 0.0, 1000.0),
        SectionBounds::new("intro", 200.0, 300.0),
        SectionBounds::new("tail", 1000.0, 200.0),
    ];
    // 150 + 50 + 100 = 300 is in both hero and intro.
    assert_eq!(compute_active_section(150.0, 50.0, &sections), Some("intro"));
    // 400 + 50 + 100 = 550 is only in hero again.
    assert_eq!(compute_active_section(400.0, 50.0, &sections), Some("hero"));
}

// =============================================================
// Links and offsets
// =============================================================

#[test]
fn in_page_target_strips_hash() {
    assert_eq!(in_page_target("#about"), Some("about"));
    assert_eq!(in_page_target("#"), Some(""));
}

#[test]
fn external_links_pass_through() {
    assert_eq!(in_page_target("https://wa.me/123"), None);
    assert_eq!(in_page_target("/cv.pdf"), None);
    assert_eq!(in_page_target(""), None);
}

#[test]
fn scroll_target_subtracts_navbar_height() {
    assert!((scroll_target_offset(1200.0, 80.0) - 1120.0).abs() < f64::EPSILON);
}

#[test]
fn link_is_active_matches_only_current_section() {
    assert!(link_is_active("#about", Some("about")));
    assert!(!link_is_active("#home", Some("about")));
    assert!(!link_is_active("#about", None));
    assert!(!link_is_active("/about", Some("about")));
}

#[test]
fn navbar_scrolled_style_starts_after_threshold() {
    assert!(!is_navbar_scrolled(0.0));
    assert!(!is_navbar_scrolled(100.0));
    assert!(is_navbar_scrolled(100.5));
}

#[test]
fn breakpoint_is_strictly_greater_than_768() {
    assert!(!exceeds_mobile_breakpoint(768.0));
    assert!(exceeds_mobile_breakpoint(769.0));
    assert!(!exceeds_mobile_breakpoint(375.0));
}
