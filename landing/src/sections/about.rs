use crate::icons::Icon;
use aviz_core::SectionId;
use aviz_core::content::{ABOUT_HIGHLIGHTS, Highlight};
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.anchor() class="section about">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"About Our School"</p>
                    <h2 class="section-title">"A Trusted Institution Since 1999"</h2>
                    <p class="section-description">
                        "Aviz Convent School is a well-established, trusted, medium-sized school providing "
                        "comprehensive English education with a focus on holistic development."
                    </p>
                </div>
                <div class="card-grid card-grid-3">
                    {ABOUT_HIGHLIGHTS
                        .iter()
                        .map(|highlight| view! { <HighlightCard highlight=*highlight /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn HighlightCard(highlight: Highlight) -> impl IntoView {
    view! {
        <article class="highlight-card">
            <div class="highlight-icon">
                <Icon glyph=highlight.glyph />
            </div>
            <h3 class="card-title">{highlight.title}</h3>
            <p class="card-text">{highlight.description}</p>
        </article>
    }
}
