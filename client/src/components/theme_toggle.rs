//! Theme toggle button, rendered once in the navbar and once in the mobile menu.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme::{self, LocalStorage};

#[component]
pub fn ThemeToggle(id: &'static str) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let icon = move || ui.with(|u| u.theme.icon_class());

    let on_click = move |_| {
        let current = ui.with_untracked(|u| u.theme);
        let next = theme::toggle(&LocalStorage, current);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button id=id class="theme-toggle" type="button" aria-label="Toggle dark mode" on:click=on_click>
            <i class=icon></i>
        </button>
    }
}
