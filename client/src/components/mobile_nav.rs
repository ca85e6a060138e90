//! Slide-in navigation for narrow viewports.

use leptos::prelude::*;

use crate::components::navbar::{NAV_LINKS, NavAnchor};
use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::{MenuEvent, UiState};
use crate::util::dom;

#[component]
pub fn MobileNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.with(UiState::menu_open);

    let on_close = move |_| {
        ui.update(|u| {
            u.handle_menu_event(MenuEvent::CloseButton);
        });
    };

    view! {
        <aside id=dom::MOBILE_NAV_ID class="mobile-nav" class:active=open aria-hidden=move || (!open()).to_string()>
            <div class="mobile-nav-header">
                <ThemeToggle id="theme-toggle-mobile"/>
                <button id="close-menu" class="close-menu" type="button" aria-label="Close menu" on:click=on_close>
                    <i class="fas fa-times"></i>
                </button>
            </div>
            <div class="mobile-nav-links">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| view! { <NavAnchor href label extra_class="mobile-nav-link"/> })
                    .collect_view()}
            </div>
        </aside>
    }
}
