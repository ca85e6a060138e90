//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod appointment_form;
pub mod footer;
pub mod form_banner;
pub mod mobile_nav;
pub mod navbar;
pub mod reveal_card;
pub mod theme_toggle;
pub mod whatsapp_button;
