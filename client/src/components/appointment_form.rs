//! Appointment booking form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field events feed `FormState`; submit validates, then hands the request
//! to `SimulatedGateway` on a local task. The banner reports the outcome and
//! the submit button stays disabled until the task finishes.
//!
//! ERROR HANDLING
//! ==============
//! Validation and simulated network failures never leave this component:
//! both end as an error banner. A submit while one is in flight is ignored.

use leptos::prelude::*;

use crate::components::form_banner::{FormBanner, show_message};
#[cfg(feature = "hydrate")]
use crate::net::appointment::SUCCESS_MESSAGE;
use crate::net::appointment::{SimulatedGateway, TimeSlot};
use crate::settings::PortfolioSettings;
use crate::state::banner::{BannerKind, BannerState};
use crate::state::form::{Field, FormState, Validity};
use crate::util::dates;

fn marked(form: RwSignal<FormState>, field: Field, validity: Validity) -> impl Fn() -> bool + Copy {
    move || form.with(|f| f.validity(field) == validity)
}

fn value_of(form: RwSignal<FormState>, field: Field) -> impl Fn() -> String + Copy {
    move || form.with(|f| f.value(field).to_owned())
}

fn input_handler(form: RwSignal<FormState>, field: Field) -> impl FnMut(leptos::ev::Event) {
    move |ev| form.update(|f| f.on_input(field, event_target_value(&ev)))
}

fn blur_handler(form: RwSignal<FormState>, field: Field) -> impl FnMut(leptos::ev::FocusEvent) {
    move |_| form.update(|f| f.on_blur(field))
}

#[component]
pub fn AppointmentForm() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let banner = expect_context::<RwSignal<BannerState>>();
    let settings = expect_context::<PortfolioSettings>();
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let submitting = move || form.with(FormState::is_submitting);

    Effect::new(move || {
        form.update(|f| f.apply_date_defaults(dates::today(), dates::tomorrow()));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(started) = form.try_update(FormState::start_submission) else {
            return;
        };
        let request = match started {
            Ok(request) => request,
            Err(err) => {
                if let Some(text) = err.banner_text() {
                    show_message(banner, text, BannerKind::Error);
                }
                return;
            }
        };
        let gateway = SimulatedGateway::from_settings(&settings);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = gateway.send(&request).await;
            match &result {
                Ok(()) => {
                    show_message(banner, SUCCESS_MESSAGE, BannerKind::Success);
                    if let Some(line) = request.confirmation_line() {
                        log::info!("{line}");
                    }
                }
                Err(err) => {
                    log::error!("Form submission error: {err}");
                    if let Some(text) = err.banner_text() {
                        show_message(banner, text, BannerKind::Error);
                    }
                }
            }
            // PHASE: RESTORE
            // Runs on both paths so the button always comes back.
            let _ = form.try_update(|f| f.finish_submission(result.is_ok(), dates::tomorrow()));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (gateway, request);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(element) = form_ref.get_untracked() {
            if crate::util::dom::advance_focus(&ev, &element) {
                ev.prevent_default();
            }
        }
    };

    view! {
        <form id="appointment-form" class="appointment-form" node_ref=form_ref novalidate on:submit=on_submit on:keydown=on_keydown>
            <div class="form-row">
                <div class="form-group">
                    <label for="name">"Full Name *"</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        placeholder="Your full name"
                        class:invalid=marked(form, Field::Name, Validity::Invalid)
                        class:valid=marked(form, Field::Name, Validity::Valid)
                        prop:value=value_of(form, Field::Name)
                        on:input=input_handler(form, Field::Name)
                        on:blur=blur_handler(form, Field::Name)
                    />
                </div>
                <div class="form-group">
                    <label for="phone">"Phone Number *"</label>
                    <input
                        id="phone"
                        name="phone"
                        type="tel"
                        placeholder="+880 1XXX-XXXXXX"
                        class:invalid=marked(form, Field::Phone, Validity::Invalid)
                        class:valid=marked(form, Field::Phone, Validity::Valid)
                        prop:value=value_of(form, Field::Phone)
                        on:input=input_handler(form, Field::Phone)
                        on:blur=blur_handler(form, Field::Phone)
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="email">"Email Address"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    placeholder="you@example.com"
                    class:invalid=marked(form, Field::Email, Validity::Invalid)
                    class:valid=marked(form, Field::Email, Validity::Valid)
                    prop:value=value_of(form, Field::Email)
                    on:input=input_handler(form, Field::Email)
                    on:blur=blur_handler(form, Field::Email)
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="date">"Preferred Date *"</label>
                    <input
                        id="date"
                        name="date"
                        type="date"
                        min=move || form.with(|f| f.min_date().to_owned())
                        class:invalid=marked(form, Field::Date, Validity::Invalid)
                        class:valid=marked(form, Field::Date, Validity::Valid)
                        prop:value=value_of(form, Field::Date)
                        on:input=input_handler(form, Field::Date)
                        on:blur=blur_handler(form, Field::Date)
                    />
                </div>
                <div class="form-group">
                    <label for="time">"Preferred Time *"</label>
                    <select
                        id="time"
                        name="time"
                        class:invalid=marked(form, Field::Time, Validity::Invalid)
                        class:valid=marked(form, Field::Time, Validity::Valid)
                        prop:value=value_of(form, Field::Time)
                        on:change=input_handler(form, Field::Time)
                        on:blur=blur_handler(form, Field::Time)
                    >
                        <option value="">"Select a time slot"</option>
                        {TimeSlot::ALL
                            .into_iter()
                            .map(|slot| view! { <option value=slot.code()>{slot.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="form-group">
                <label for="message">"Reason for Visit"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="4"
                    placeholder="Briefly describe your dental concern"
                    prop:value=value_of(form, Field::Message)
                    on:input=input_handler(form, Field::Message)
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary submit-btn" disabled=submitting>
                <Show
                    when=submitting
                    fallback=|| view! { <i class="fas fa-calendar-check"></i> " Book Appointment" }
                >
                    <i class="fas fa-spinner fa-spin"></i>
                    " Sending..."
                </Show>
            </button>
            <FormBanner/>
        </form>
    }
}
