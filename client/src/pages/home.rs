//! Home page: the single-page portfolio.
//!
//! ARCHITECTURE
//! ============
//! The page renders every section and owns the window-level wiring:
//! scroll drives the active link and navbar style, resize/Escape/outside
//! clicks close the mobile menu, and an intersection observer reveals cards.
//! Listener handles are dropped in `on_cleanup`.

use leptos::prelude::*;

use crate::components::appointment_form::AppointmentForm;
use crate::components::footer::Footer;
use crate::components::mobile_nav::MobileNav;
use crate::components::navbar::{NavAnchor, Navbar};
use crate::components::reveal_card::RevealCard;
use crate::components::whatsapp_button::WhatsAppButton;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;

/// `(icon, title, description)` per service card.
const SERVICES: [(&str, &str, &str); 6] = [
    ("fas fa-tooth", "General Dentistry", "Check-ups, scaling and polishing, fillings and preventive care for the whole family."),
    ("fas fa-teeth", "Orthodontics", "Braces and clear aligners to straighten teeth and correct bite problems."),
    ("fas fa-teeth-open", "Root Canal Treatment", "Painless endodontic therapy that saves infected or damaged teeth."),
    ("fas fa-smile", "Cosmetic Dentistry", "Whitening, veneers and smile design for a confident appearance."),
    ("fas fa-crown", "Crowns & Bridges", "Durable restorations that rebuild strength and fill gaps."),
    ("fas fa-child", "Pediatric Dentistry", "Gentle, friendly care that builds good habits early."),
];

/// `(period, role, place, summary)` per timeline entry, newest first.
const EXPERIENCE: [(&str, &str, &str, &str); 4] = [
    ("2021 - Present", "Consultant Dental Surgeon", "Smile Care Dental Clinic, Dhaka", "Leads restorative and cosmetic treatment planning."),
    ("2018 - 2021", "Dental Surgeon", "City Dental Hospital, Dhaka", "Handled general, surgical and emergency dental cases."),
    ("2017 - 2018", "Intern Dental Surgeon", "Dhaka Dental College Hospital", "Rotations across oral surgery, prosthodontics and orthodontics."),
    ("2012 - 2017", "Bachelor of Dental Surgery (BDS)", "Dhaka Dental College", "Graduated with distinction in conservative dentistry."),
];

/// `(icon, title, lines)` per contact card.
const CONTACTS: [(&str, &str, &[&str]); 3] = [
    ("fas fa-map-marker-alt", "Chamber", &["Smile Care Dental Clinic", "Dhanmondi, Dhaka"]),
    ("fas fa-phone", "Phone", &["+880 1856-030508"]),
    ("fas fa-clock", "Hours", &["Sat - Thu: 9 AM - 8 PM", "Friday: Closed"]),
];

/// Recompute the active section and navbar style from the live layout.
#[cfg(feature = "hydrate")]
fn sync_scroll_state(ui: RwSignal<UiState>) {
    use crate::util::{dom, nav};

    let scroll_y = dom::scroll_y();
    let sections = dom::measure_sections();
    let active = nav::compute_active_section(scroll_y, dom::navbar_height(), &sections)
        .filter(|id| !id.is_empty())
        .map(str::to_owned);
    let scrolled = nav::is_navbar_scrolled(scroll_y);
    ui.maybe_update(|u| u.sync_scroll(active, scrolled));
}

#[cfg(feature = "hydrate")]
fn install_window_listeners(ui: RwSignal<UiState>) {
    use crate::state::ui::MenuEvent;
    use crate::util::dom::{self, MOBILE_MENU_BUTTON_ID, MOBILE_NAV_ID};
    use crate::util::reveal::{REVEAL_SELECTOR, observe_entrances};

    let menu_event = move |event: MenuEvent| ui.maybe_update(|u| u.handle_menu_event(event));

    let scroll = window_event_listener(leptos::ev::scroll, move |_| sync_scroll_state(ui));
    let resize = window_event_listener(leptos::ev::resize, move |_| {
        menu_event(MenuEvent::Resize { width: dom::viewport_width() });
    });
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            menu_event(MenuEvent::Escape);
        }
    });
    let click = window_event_listener(leptos::ev::click, move |ev| {
        if ui.with_untracked(UiState::menu_open) && !dom::event_within(&ev, &[MOBILE_NAV_ID, MOBILE_MENU_BUTTON_ID]) {
            menu_event(MenuEvent::OutsideClick);
        }
    });

    // Effects run after mount, when the sections and cards exist.
    Effect::new(move || {
        sync_scroll_state(ui);
        observe_entrances(REVEAL_SELECTOR, move |id| {
            ui.maybe_update(|u| u.reveal(&id));
        });
    });

    on_cleanup(move || {
        scroll.remove();
        resize.remove();
        keydown.remove();
        click.remove();
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    install_window_listeners(expect_context::<RwSignal<UiState>>());

    view! {
        <Navbar/>
        <MobileNav/>
        <main>
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>"Dr. Tawhid Hasan"</h1>
                    <p class="hero-subtitle">"BDS | Dental Surgeon"</p>
                    <p class="hero-text">"Healthy smiles through gentle, modern dentistry."</p>
                    <div class="hero-actions">
                        <NavAnchor href="#contact" label="Book an Appointment" extra_class="btn btn-primary"/>
                        <NavAnchor href="#services" label="Our Services" extra_class="btn btn-outline"/>
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <h2 class="section-title">"About Me"</h2>
                <p>
                    "I am a registered dental surgeon with years of experience in general, cosmetic and \
                     restorative dentistry. My focus is comfortable treatment and clear explanations, so \
                     every patient understands their options."
                </p>
            </section>

            <section id="services" class="services">
                <h2 class="section-title">"Services"</h2>
                <div class="services-grid">
                    {SERVICES
                        .into_iter()
                        .enumerate()
                        .map(|(index, (icon, title, description))| {
                            view! {
                                <RevealCard kind="service-card" reveal_id=format!("service-{index}")>
                                    <i class=icon></i>
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </RevealCard>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="experience" class="experience">
                <h2 class="section-title">"Experience & Education"</h2>
                <div class="timeline">
                    {EXPERIENCE
                        .into_iter()
                        .enumerate()
                        .map(|(index, (period, role, place, summary))| {
                            view! {
                                <div class="timeline-item">
                                    <RevealCard kind="timeline-content" reveal_id=format!("timeline-{index}")>
                                        <span class="timeline-date">{period}</span>
                                        <h3>{role}</h3>
                                        <h4>{place}</h4>
                                        <p>{summary}</p>
                                    </RevealCard>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">"Book an Appointment"</h2>
                <div class="contact-grid">
                    <div class="contact-info">
                        {CONTACTS
                            .into_iter()
                            .enumerate()
                            .map(|(index, (icon, title, lines))| {
                                view! {
                                    <RevealCard kind="contact-card" reveal_id=format!("contact-{index}")>
                                        <i class=icon></i>
                                        <h3>{title}</h3>
                                        {lines.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                        <WhatsAppButton/>
                    </div>
                    <AppointmentForm/>
                </div>
            </section>
        </main>
        <Footer/>
    }
}
