//! Root component, HTML shell and page-wide effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every request and embeds the
//! runtime settings as JSON. `App` provides the shared state signals and
//! mirrors them onto `<body>`: theme class, scroll-lock and the `loaded`
//! marker.
//!
//! TRADE-OFFS
//! ==========
//! The stored theme is read in an effect after hydration, not during render.
//! The server cannot see `localStorage`, so reading it earlier would make the
//! first client render disagree with the server HTML.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::pages::home::HomePage;
use crate::settings::{PortfolioSettings, SETTINGS_ELEMENT_ID};
use crate::state::banner::BannerState;
use crate::state::form::FormState;
use crate::state::ui::UiState;
use crate::util::dom;
use crate::util::theme::{self, LocalStorage};

/// Delay before `<body>` receives the `loaded` class.
pub const LOADED_DELAY_MS: u32 = 100;

/// Full HTML document for server rendering.
pub fn shell(options: LeptosOptions, settings: PortfolioSettings) -> impl IntoView {
    let settings_json = settings.to_json();
    provide_context(settings);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=SETTINGS_ELEMENT_ID type="application/json" inner_html=settings_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Route-list generation renders without a shell, so settings may be absent.
    let settings = use_context::<PortfolioSettings>().unwrap_or_default();
    let ui = RwSignal::new(UiState::default());
    let form = RwSignal::new(FormState::default());
    let banner = RwSignal::new(BannerState::default());

    provide_context(settings);
    provide_context(ui);
    provide_context(form);
    provide_context(banner);

    let theme = Memo::new(move |_| ui.with(|u| u.theme));
    let scroll_locked = Memo::new(move |_| ui.with(UiState::scroll_locked));
    let loaded = Memo::new(move |_| ui.with(UiState::loaded));

    // Initial theme: stored preference, else the OS hint.
    Effect::new(move || {
        let initial = theme::load_initial(&LocalStorage);
        ui.update(|u| u.theme = initial);
    });

    Effect::new(move || theme::apply(theme.get()));
    Effect::new(move || dom::set_scroll_lock(scroll_locked.get()));
    Effect::new(move || {
        if loaded.get() {
            dom::set_body_class(dom::LOADED_CLASS, true);
        }
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        gloo_timers::callback::Timeout::new(LOADED_DELAY_MS, move || {
            ui.update(|u| {
                u.mark_loaded();
            });
        })
        .forget();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/clinic-site.css"/>
        <Title text="Dr. Tawhid Hasan | Dental Surgeon"/>
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
