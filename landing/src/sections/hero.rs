use crate::icons::Icon;
use crate::state::PageHandle;
use aviz_core::SectionId;
use aviz_core::content::{Glyph, HERO_PHOTO, HERO_STATS, school};
use leptos::prelude::*;

#[component]
pub fn Hero(page: PageHandle) -> impl IntoView {
    let badge_text = format!(
        "Admissions Open {} • Established {}",
        school::ADMISSION_YEAR,
        school::ESTABLISHED
    );
    let year_text = format!("{} Academic Year", school::ADMISSION_YEAR);

    view! {
        <section id=SectionId::Home.anchor() class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <Icon glyph=Glyph::Star class="icon icon-xs" />
                            <span>{badge_text}</span>
                        </div>
                        <h1 class="hero-title">
                            "Kindness at the Core — "
                            <span class="hero-title-accent">"Feathers to Fly"</span>
                        </h1>
                        <p class="hero-description">
                            "At Aviz Convent School, we believe every child is known, valued, and supported "
                            "as an individual. We prepare students for real life, not just exams, with "
                            "21st-century skills for a global, digital world."
                        </p>
                        <div class="hero-actions">
                            <button class="btn btn-primary btn-large" on:click=move |_| page.open_popup()>
                                "Apply Now"
                                <Icon glyph=Glyph::ArrowRight class="icon icon-sm" />
                            </button>
                            <button
                                class="btn btn-secondary btn-large"
                                on:click=move |_| page.navigate(SectionId::About)
                            >
                                "Learn More"
                            </button>
                        </div>
                        <div class="hero-stats">
                            {HERO_STATS
                                .iter()
                                .map(|stat| view! {
                                    <div class="hero-stat">
                                        <div class="hero-stat-value">{stat.value}</div>
                                        <div class="hero-stat-caption">{stat.caption}</div>
                                    </div>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="hero-visual">
                        <div class="hero-photo">
                            <img src=HERO_PHOTO.src alt=HERO_PHOTO.alt />
                        </div>
                        <div class="hero-card">
                            <div class="hero-card-icon">
                                <Icon glyph=Glyph::CheckCircle />
                            </div>
                            <div>
                                <p class="hero-card-title">"Admissions Open"</p>
                                <p class="hero-card-caption">{year_text}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
