use super::*;

fn opened() -> UiState {
    let mut ui = UiState::default();
    assert!(ui.handle_menu_event(MenuEvent::Toggle));
    ui
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_defaults() {
    let ui = UiState::default();
    assert_eq!(ui.theme, Theme::Light);
    assert!(!ui.menu_open());
    assert!(!ui.scroll_locked());
    assert_eq!(ui.active_section(), None);
    assert!(!ui.navbar_scrolled());
    assert!(!ui.loaded());
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn opening_menu_locks_scroll() {
    let ui = opened();
    assert!(ui.menu_open());
    assert!(ui.scroll_locked());
}

#[test]
fn toggle_flips_open_state() {
    let mut ui = opened();
    assert!(ui.handle_menu_event(MenuEvent::Toggle));
    assert!(!ui.menu_open());
}

#[test]
fn every_close_trigger_clears_menu_and_scroll_lock() {
    let triggers = [
        MenuEvent::CloseButton,
        MenuEvent::OutsideClick,
        MenuEvent::Escape,
        MenuEvent::Resize { width: 1024.0 },
        MenuEvent::LinkFollowed,
    ];
    for trigger in triggers {
        let mut ui = opened();
        assert!(ui.handle_menu_event(trigger), "{trigger:?} should close");
        assert!(!ui.menu_open(), "{trigger:?}");
        assert!(!ui.scroll_locked(), "{trigger:?}");
    }
}

#[test]
fn resize_below_breakpoint_keeps_menu_open() {
    let mut ui = opened();
    assert!(!ui.handle_menu_event(MenuEvent::Resize { width: 768.0 }));
    assert!(!ui.handle_menu_event(MenuEvent::Resize { width: 400.0 }));
    assert!(ui.menu_open());
}

#[test]
fn close_triggers_on_closed_menu_report_no_change() {
    let mut ui = UiState::default();
    assert!(!ui.handle_menu_event(MenuEvent::Escape));
    assert!(!ui.handle_menu_event(MenuEvent::OutsideClick));
    assert!(!ui.handle_menu_event(MenuEvent::Resize { width: 1400.0 }));
    assert!(!ui.menu_open());
}

#[test]
fn open_and_close_are_idempotent() {
    let mut ui = UiState::default();
    assert!(ui.open_menu());
    assert!(!ui.open_menu());
    assert!(ui.close_menu());
    assert!(!ui.close_menu());
}

// =============================================================
// Scroll highlights
// =============================================================

#[test]
fn sync_scroll_reports_changes_only() {
    let mut ui = UiState::default();
    assert!(ui.sync_scroll(Some("about".to_owned()), true));
    assert!(!ui.sync_scroll(Some("about".to_owned()), true));
    assert_eq!(ui.active_section(), Some("about"));
    assert!(ui.navbar_scrolled());

    assert!(ui.sync_scroll(None, false));
    assert_eq!(ui.active_section(), None);
}

// =============================================================
// Reveals and load marker
// =============================================================

#[test]
fn reveal_is_one_shot() {
    let mut ui = UiState::default();
    assert!(ui.reveal("service-1"));
    assert!(!ui.reveal("service-1"));
    assert!(ui.is_revealed("service-1"));
    assert!(!ui.is_revealed("service-2"));
}

#[test]
fn mark_loaded_once() {
    let mut ui = UiState::default();
    assert!(ui.mark_loaded());
    assert!(!ui.mark_loaded());
    assert!(ui.loaded());
}
