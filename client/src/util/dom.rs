//! Browser glue for page-level effects: scrolling, body classes, focus.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these helpers instead of touching `web_sys` directly.
//! Outside the `hydrate` build every helper is an inert no-op (or returns a
//! neutral value) so SSR and native tests never need a DOM.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::util::nav::SectionBounds;

pub const NAVBAR_ID: &str = "navbar";
pub const MOBILE_NAV_ID: &str = "mobile-nav";
pub const MOBILE_MENU_BUTTON_ID: &str = "mobile-menu-btn";

/// Class added to `<body>` shortly after hydration to start intro animations.
pub const LOADED_CLASS: &str = "loaded";

#[cfg(feature = "hydrate")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
}

/// Disable or restore page scrolling behind the mobile menu.
pub fn set_scroll_lock(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = body() else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

pub fn set_body_class(class: &str, on: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = body() {
            let _ = body.class_list().toggle_with_force(class, on);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (class, on);
    }
}

pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Rendered height of the fixed navbar.
pub fn navbar_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(NAVBAR_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map_or(0.0, |el| f64::from(el.offset_height()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Current bounds of every `<section>`, in document order.
pub fn measure_sections() -> Vec<SectionBounds> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(list) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector_all("section").ok())
        else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionBounds::new(el.id(), f64::from(el.offset_top()), f64::from(el.client_height())))
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Smooth-scroll to element `target_id` below the navbar and push `href`
/// onto the history without reloading.
///
/// Returns `false` (and does nothing) when the element does not exist.
pub fn smooth_scroll_to(target_id: &str, href: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(element) = window
            .document()
            .and_then(|d| d.get_element_by_id(target_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return false;
        };

        let top = crate::util::nav::scroll_target_offset(f64::from(element.offset_top()), navbar_height());
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);

        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target_id, href);
        false
    }
}

/// Smoothly bring element `id` into view if it is off-screen.
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn current_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// ISO-8601 timestamp of the current instant.
pub fn iso_timestamp() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Whether `event` originated inside any of the elements with `ids`.
#[cfg(feature = "hydrate")]
pub fn event_within(event: &web_sys::Event, ids: &[&str]) -> bool {
    use wasm_bindgen::JsCast;

    let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    ids.iter()
        .filter_map(|id| document.get_element_by_id(id))
        .any(|el| el.contains(Some(&target)))
}

/// Move focus from the event's control to the next control of `form`.
///
/// Textareas keep Enter for new lines. Returns whether the caller should
/// suppress the key's default action (implicit submit), which is every
/// control except a textarea.
#[cfg(feature = "hydrate")]
pub fn advance_focus(event: &web_sys::Event, form: &web_sys::HtmlFormElement) -> bool {
    use wasm_bindgen::JsCast;

    let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    if target.tag_name().eq_ignore_ascii_case("textarea") {
        return false;
    }

    let controls = form.elements();
    let len = controls.length();
    let next = (0..len)
        .find(|&i| controls.item(i).is_some_and(|el| el.is_same_node(Some(&target))))
        .and_then(|current| crate::state::form::next_control_index(current as usize, len as usize))
        .and_then(|next| u32::try_from(next).ok())
        .and_then(|next| controls.item(next))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(el) = next {
        let _ = el.focus();
    }
    true
}
