use crate::icons::Icon;
use aviz_core::content::{Glyph, TESTIMONIAL_STARS, TESTIMONIALS, Testimonial};
use leptos::prelude::*;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section testimonials">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Parent Testimonials"</p>
                    <h2 class="section-title">"What Parents Say About Us"</h2>
                </div>
                <div class="card-grid card-grid-3">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let quote = format!("\u{201c}{}\u{201d}", testimonial.quote);
    let initial = testimonial.initial().to_string();

    view! {
        <figure class="testimonial-card">
            <div class="testimonial-stars">
                {(0..TESTIMONIAL_STARS)
                    .map(|_| view! { <Icon glyph=Glyph::Star class="icon icon-sm star-filled" /> })
                    .collect::<Vec<_>>()}
            </div>
            <blockquote class="testimonial-quote">{quote}</blockquote>
            <figcaption class="testimonial-author">
                <span class="testimonial-avatar">{initial}</span>
                <span>
                    <span class="testimonial-name">{testimonial.name}</span>
                    <span class="testimonial-role">{testimonial.role}</span>
                </span>
            </figcaption>
        </figure>
    }
}
