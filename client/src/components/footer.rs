use leptos::prelude::*;

use crate::util::dates;

#[component]
pub fn Footer() -> impl IntoView {
    // Filled in after hydration so server and client clocks can't disagree.
    let year = RwSignal::new(None::<i32>);
    Effect::new(move || year.set(dates::current_year()));

    view! {
        <footer class="footer">
            <p>
                "© "
                <span id="current-year">{move || year.get().map(|y| y.to_string()).unwrap_or_default()}</span>
                " Dr. Tawhid Hasan. All rights reserved."
            </p>
        </footer>
    }
}
