//! Scroll-triggered entrance animations.
//!
//! Cards start hidden (see `style/main.css`) and get the `visible` class the
//! first time they intersect the viewport. The transition is one-way: an
//! element that scrolls back out stays revealed.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Elements that animate in.
pub const REVEAL_SELECTOR: &str = ".service-card, .timeline-content, .contact-card";

/// Attribute carrying the stable id of an animated element.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Visible fraction that counts as "entered".
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Ids of elements that have already been revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Record `id` as revealed. Returns `true` only the first time.
    pub fn reveal(&mut self, id: &str) -> bool {
        if self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_owned())
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Watch every element matching `selector` and call `on_reveal` with its
/// [`REVEAL_ID_ATTR`] the first time it intersects the viewport.
///
/// Each element is unobserved once revealed. The observer lives for the
/// rest of the page.
pub fn observe_entrances(selector: &str, on_reveal: impl Fn(String) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(targets) = document.query_selector_all(selector) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(id) = target.get_attribute(REVEAL_ID_ATTR) {
                        on_reveal(id);
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin("0px");
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {e:?}");
                return;
            }
        };
        for index in 0..targets.length() {
            if let Some(element) = targets.item(index).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&element);
            }
        }
        callback.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (selector, on_reveal);
    }
}
