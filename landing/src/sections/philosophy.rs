use crate::icons::Icon;
use aviz_core::SectionId;
use aviz_core::content::{CORE_VALUES, Glyph, Highlight, PHILOSOPHY_PILLARS};
use leptos::prelude::*;

#[component]
pub fn Philosophy() -> impl IntoView {
    view! {
        <section id=SectionId::Philosophy.anchor() class="section philosophy">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Our Philosophy"</p>
                    <h2 class="section-title">"Building Character, Creating Future Leaders"</h2>
                </div>

                <div class="card-grid card-grid-2">
                    {PHILOSOPHY_PILLARS
                        .iter()
                        .map(|pillar| view! { <PillarCard pillar=*pillar /> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="values-panel">
                    <h3 class="values-title">"Our Core Values"</h3>
                    <div class="values-grid">
                        {CORE_VALUES
                            .iter()
                            .map(|value| view! {
                                <div class="value-chip">
                                    <Icon glyph=Glyph::CheckCircle class="icon icon-sm" />
                                    <span>{*value}</span>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PillarCard(pillar: Highlight) -> impl IntoView {
    view! {
        <article class="pillar-card">
            <div class="pillar-icon">
                <Icon glyph=pillar.glyph class="icon icon-lg" />
            </div>
            <div>
                <h3 class="card-title">{pillar.title}</h3>
                <p class="card-text">{pillar.description}</p>
            </div>
        </article>
    }
}
