//! Scroll-position math for the fixed navbar.
//!
//! Section highlighting, the scrolled navbar style and in-page link targets
//! are computed here from plain numbers; `util::dom` supplies the
//! measurements in the browser.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Distance below the navbar at which a section counts as "in view".
pub const LOOKAHEAD_OFFSET: f64 = 100.0;

/// Scroll depth after which the navbar switches to its raised style.
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 100.0;

/// Viewport width above which the mobile menu is never shown.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Vertical extent of one page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section whose `[top, top + height)` range holds the viewport anchor.
///
/// Sections are scanned in document order and the last match wins, so where
/// two ranges overlap the later section is reported.
#[must_use]
pub fn compute_active_section(scroll_y: f64, navbar_height: f64, sections: &[SectionBounds]) -> Option<&str> {
    let position = scroll_y + navbar_height + LOOKAHEAD_OFFSET;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

/// Element id targeted by an in-page link, or `None` for links that should
/// navigate normally.
#[must_use]
pub fn in_page_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Scroll offset that puts `element_top` just below the fixed navbar.
#[must_use]
pub fn scroll_target_offset(element_top: f64, navbar_height: f64) -> f64 {
    element_top - navbar_height
}

#[must_use]
pub fn is_navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_THRESHOLD
}

/// Whether the link pointing at `href` should carry the active style.
#[must_use]
pub fn link_is_active(href: &str, active_section: Option<&str>) -> bool {
    match (in_page_target(href), active_section) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

/// Whether a resize to `viewport_width` should close an open mobile menu.
#[must_use]
pub fn exceeds_mobile_breakpoint(viewport_width: f64) -> bool {
    viewport_width > MOBILE_BREAKPOINT
}
