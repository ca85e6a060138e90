use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    fn with(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_owned())) }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_owned());
    }
}

// =============================================================
// Initial theme
// =============================================================

#[test]
fn stored_value_wins_over_os_hint() {
    assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
}

#[test]
fn os_hint_used_when_nothing_stored() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn unknown_stored_value_reads_as_light() {
    assert_eq!(resolve_initial(Some("sepia"), true), Theme::Light);
}

#[test]
fn empty_stored_value_counts_as_absent() {
    assert_eq!(resolve_initial(Some(""), true), Theme::Dark);
}

#[test]
fn load_initial_reads_the_store() {
    assert_eq!(load_initial(&MemoryStore::with("dark")), Theme::Dark);
    assert_eq!(load_initial(&MemoryStore::default()), Theme::Light);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_persists_new_value() {
    let store = MemoryStore::default();
    let next = toggle(&store, Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert_eq!(store.load().as_deref(), Some("dark"));
}

#[test]
fn toggling_twice_restores_flag_and_stored_value() {
    let store = MemoryStore::with("light");
    let start = load_initial(&store);
    let back = toggle(&store, toggle(&store, start));
    assert_eq!(back, start);
    assert_eq!(store.load().as_deref(), Some("light"));
}

#[test]
fn indicators_follow_theme() {
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Light.cta_shadow(), "0 4px 15px rgba(37, 211, 102, 0.3)");
    assert_eq!(Theme::Dark.cta_shadow(), "0 4px 15px rgba(37, 211, 102, 0.5)");
}

#[test]
fn browser_store_is_inert_in_non_hydrate_tests() {
    LocalStorage.save("dark");
    assert_eq!(LocalStorage.load(), None);
    assert!(!prefers_dark_scheme());
    apply(Theme::Dark);
}
