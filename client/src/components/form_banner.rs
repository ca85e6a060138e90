//! Success/error banner under the appointment form.

use leptos::prelude::*;

use crate::state::banner::{BannerKind, BannerState};
#[cfg(feature = "hydrate")]
use crate::state::banner::BANNER_HIDE_MS;
#[cfg(feature = "hydrate")]
use crate::util::dom;

pub const FORM_MESSAGE_ID: &str = "form-message";

/// Show `text` in the banner, scroll it into view and schedule the hide.
///
/// A newer call supersedes the pending hide of an older one.
pub fn show_message(banner: RwSignal<BannerState>, text: &str, kind: BannerKind) {
    let Some(generation) = banner.try_update(|b| b.show(text, kind)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        // Wait a frame so the banner is displayed before measuring it.
        request_animation_frame(|| dom::scroll_into_view(FORM_MESSAGE_ID));
        gloo_timers::callback::Timeout::new(BANNER_HIDE_MS, move || {
            let _ = banner.try_update(|b| b.hide_if_current(generation));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = generation;
    }
}

#[component]
pub fn FormBanner() -> impl IntoView {
    let banner = expect_context::<RwSignal<BannerState>>();
    let display = move || if banner.with(BannerState::is_visible) { "block" } else { "none" };

    view! {
        <div
            id=FORM_MESSAGE_ID
            class=move || banner.with(BannerState::css_class)
            style:display=display
            role="status"
            aria-live="polite"
        >
            {move || banner.with(|b| b.text().to_owned())}
        </div>
    }
}
