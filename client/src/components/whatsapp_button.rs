//! WhatsApp call-to-action that carries the current form as a chat message.

use leptos::prelude::*;

use crate::settings::PortfolioSettings;
use crate::state::form::{FormState, FormValues};
use crate::state::ui::UiState;
use crate::util::{deep_link, dom};

#[component]
pub fn WhatsAppButton() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let number = expect_context::<PortfolioSettings>().whatsapp_number;
    let anchor = NodeRef::<leptos::html::A>::new();
    let initial_href = deep_link::appointment_link(&number, &FormValues::default());

    // The href must be rewritten before the browser follows the link, so it
    // is set on the element directly instead of through a reactive attribute.
    let on_click = move |_| {
        let href = form.with_untracked(|f| deep_link::appointment_link(&number, f.values()));
        #[cfg(feature = "hydrate")]
        if let Some(element) = anchor.get_untracked() {
            element.set_href(&href);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = href;

        log::info!("WhatsApp appointment button clicked");
        let record = deep_link::click_record(&dom::iso_timestamp(), &dom::current_url());
        log::info!("WhatsApp click logged: {record}");
    };

    view! {
        <a
            id="whatsapp-btn"
            class="btn btn-whatsapp"
            href=initial_href
            target="_blank"
            rel="noopener noreferrer"
            node_ref=anchor
            style:box-shadow=move || ui.with(|u| u.theme.cta_shadow())
            on:click=on_click
        >
            <i class="fab fa-whatsapp"></i>
            " Book via WhatsApp"
        </a>
    }
}
