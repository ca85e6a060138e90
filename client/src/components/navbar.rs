//! Fixed top navigation bar and the in-page link used by both menus.
//!
//! DESIGN
//! ======
//! `NavAnchor` intercepts clicks on `#` links, scrolls below the fixed
//! navbar, pushes the hash onto history and closes the mobile menu. Links
//! to other pages are left to the browser.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::{MenuEvent, UiState};
use crate::util::{dom, nav};

/// Primary navigation entries as `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#experience", "Experience"),
    ("#contact", "Contact"),
];

#[component]
pub fn NavAnchor(href: &'static str, label: &'static str, #[prop(optional)] extra_class: &'static str) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let is_active = move || ui.with(|u| nav::link_is_active(href, u.active_section()));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(target) = nav::in_page_target(href) else {
            return;
        };
        ev.prevent_default();
        if dom::smooth_scroll_to(target, href) {
            ui.update(|u| {
                u.handle_menu_event(MenuEvent::LinkFollowed);
            });
        }
    };

    view! {
        <a href=href class=format!("nav-link {extra_class}") class:active=is_active on:click=on_click>
            {label}
        </a>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let scrolled = move || ui.with(UiState::navbar_scrolled);
    let menu_open = move || ui.with(UiState::menu_open);

    let on_menu_button = move |_| {
        ui.update(|u| {
            u.handle_menu_event(MenuEvent::Toggle);
        });
    };

    view! {
        <nav id=dom::NAVBAR_ID class="navbar" class:scrolled=scrolled>
            <div class="nav-container">
                <NavAnchor href="#home" label="Dr. Tawhid Hasan" extra_class="logo"/>
                <div class="nav-links">
                    {NAV_LINKS.into_iter().map(|(href, label)| view! { <NavAnchor href label/> }).collect_view()}
                </div>
                <div class="nav-actions">
                    <ThemeToggle id="theme-toggle"/>
                    <button
                        id=dom::MOBILE_MENU_BUTTON_ID
                        class="mobile-menu-btn"
                        type="button"
                        aria-label="Open menu"
                        aria-expanded=move || menu_open().to_string()
                        on:click=on_menu_button
                    >
                        <i class="fas fa-bars"></i>
                    </button>
                </div>
            </div>
        </nav>
    }
}
