//! Card that fades in the first time it scrolls into view.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// `kind` is the card's base class and must match the page's reveal selector.
/// `reveal_id` lands in `data-reveal-id`, which the observer reports back.
#[component]
pub fn RevealCard(kind: &'static str, reveal_id: String, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let id = reveal_id.clone();
    let visible = move || ui.with(|u| u.is_revealed(&id));

    view! {
        <div class=kind class:visible=visible data-reveal-id=reveal_id>
            {children()}
        </div>
    }
}
