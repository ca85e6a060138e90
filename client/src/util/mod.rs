//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (`validation`, `nav`, `dates`, `deep_link`) carry the page's
//! rules and are unit-tested natively. `dom`, `reveal`, and `theme` isolate
//! browser access so components never reach for `web_sys` themselves.

pub mod dates;
pub mod deep_link;
pub mod dom;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod validation;
