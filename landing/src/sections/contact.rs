use crate::icons::Icon;
use aviz_core::SectionId;
use aviz_core::content::{Glyph, HOURS, SchoolHours, contact};
use leptos::attr::custom::custom_attribute;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.anchor() class="section contact">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Get In Touch"</p>
                    <h2 class="section-title">"Visit Us Today"</h2>
                    <p class="section-description">
                        "We'd love to hear from you. Reach out to us for any queries or to schedule a visit."
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info">
                        <div class="contact-card">
                            <h3 class="card-title">"Contact Information"</h3>

                            <ContactRow glyph=Glyph::MapPin label="Address">
                                <address class="contact-address">
                                    {contact::ADDRESS
                                        .iter()
                                        .map(|line| view! { <span class="contact-address-line">{*line}</span> })
                                        .collect::<Vec<_>>()}
                                </address>
                            </ContactRow>

                            <ContactRow glyph=Glyph::Phone label="Phone">
                                <a href=contact::PHONE_HREF class="contact-link">{contact::PHONE}</a>
                            </ContactRow>

                            <ContactRow glyph=Glyph::Mail label="Email">
                                <a href=contact::EMAIL_HREF class="contact-link">{contact::EMAIL}</a>
                            </ContactRow>

                            <ContactRow glyph=Glyph::Clock label="School Hours">
                                <HoursTable class="hours-table" />
                            </ContactRow>
                        </div>

                        <div class="contact-actions">
                            <a href=contact::PHONE_HREF class="btn btn-call">
                                <Icon glyph=Glyph::Phone class="icon icon-sm" />
                                "Call Now"
                            </a>
                            <a
                                href=contact::CHAT_HREF
                                target="_blank"
                                rel="noopener noreferrer"
                                class="btn btn-primary"
                            >
                                <Icon glyph=Glyph::Calendar class="icon icon-sm" />
                                "Book Visit"
                            </a>
                        </div>
                    </div>

                    <div class="contact-map">
                        <iframe
                            src=contact::MAP_EMBED
                            title=contact::MAP_TITLE
                            width="100%"
                            height="100%"
                            allowfullscreen=""
                            referrerpolicy="no-referrer-when-downgrade"
                            {..custom_attribute("loading", "lazy")}
                        ></iframe>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactRow(glyph: Glyph, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="contact-row">
            <div class="contact-row-icon">
                <Icon glyph=glyph />
            </div>
            <div>
                <p class="contact-row-label">{label}</p>
                {children()}
            </div>
        </div>
    }
}

/// Weekly timetable; closed days get the accent colour.
#[component]
pub(super) fn HoursTable(class: &'static str) -> impl IntoView {
    view! {
        <ul class=class>
            {HOURS.iter().map(|hours| view! { <HoursRow hours=*hours /> }).collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn HoursRow(hours: SchoolHours) -> impl IntoView {
    let opening_class = if hours.is_closed() { "hours-time hours-closed" } else { "hours-time" };
    view! {
        <li class="hours-row">
            <span class="hours-day">{hours.day}</span>
            <span class=opening_class>{hours.opening.to_string()}</span>
        </li>
    }
}
