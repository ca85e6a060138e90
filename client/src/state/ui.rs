//! Page chrome state: theme, mobile menu, scroll highlights and reveals.
//!
//! DESIGN
//! ======
//! One `UiState` lives in an `RwSignal` provided via context. Components
//! read it reactively and mutate through the methods below; effects in
//! `app` mirror the theme and the scroll-lock onto `<body>`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::nav;
use crate::util::reveal::RevealTracker;
use crate::util::theme::Theme;

/// Things that open or close the slide-in mobile menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    /// Hamburger button.
    Toggle,
    /// The menu's own close button.
    CloseButton,
    /// Click landing outside both the menu and its button.
    OutsideClick,
    Escape,
    /// Window resized to `width` CSS pixels.
    Resize { width: f64 },
    /// An in-page link inside or outside the menu was followed.
    LinkFollowed,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    menu_open: bool,
    active_section: Option<String>,
    navbar_scrolled: bool,
    revealed: RevealTracker,
    loaded: bool,
}

impl UiState {
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Page scrolling is disabled exactly while the mobile menu is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.is_revealed(id)
    }

    #[must_use]
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn open_menu(&mut self) -> bool {
        let changed = !self.menu_open;
        self.menu_open = true;
        changed
    }

    pub fn close_menu(&mut self) -> bool {
        let changed = self.menu_open;
        self.menu_open = false;
        changed
    }

    /// Apply a menu trigger. Returns whether the open state changed.
    pub fn handle_menu_event(&mut self, event: MenuEvent) -> bool {
        match event {
            MenuEvent::Toggle => {
                if self.menu_open {
                    self.close_menu()
                } else {
                    self.open_menu()
                }
            }
            MenuEvent::CloseButton | MenuEvent::OutsideClick | MenuEvent::Escape | MenuEvent::LinkFollowed => {
                self.close_menu()
            }
            MenuEvent::Resize { width } => nav::exceeds_mobile_breakpoint(width) && self.close_menu(),
        }
    }

    /// Store the latest scroll-derived highlights. Returns whether anything changed.
    pub fn sync_scroll(&mut self, active_section: Option<String>, navbar_scrolled: bool) -> bool {
        let changed = self.active_section != active_section || self.navbar_scrolled != navbar_scrolled;
        self.active_section = active_section;
        self.navbar_scrolled = navbar_scrolled;
        changed
    }

    /// Mark an animated element as revealed. Returns `true` the first time.
    pub fn reveal(&mut self, id: &str) -> bool {
        self.revealed.reveal(id)
    }

    pub fn mark_loaded(&mut self) -> bool {
        let changed = !self.loaded;
        self.loaded = true;
        changed
    }
}
