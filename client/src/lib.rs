//! Dental portfolio page, rendered on the server and hydrated in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server crate calls [`app::shell`] to render HTML. The browser bundle
//! (built with the `hydrate` feature) enters through [`hydrate`], which reads
//! the settings embedded in that HTML and attaches the reactive [`app::App`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod settings;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let settings = settings::PortfolioSettings::load();
    log::info!("Dr. Tawhid Hasan Dental Portfolio initialized successfully!");

    leptos::mount::hydrate_body(move || {
        provide_context(settings.clone());
        view! { <app::App/> }
    });
}
