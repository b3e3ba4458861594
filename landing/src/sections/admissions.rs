use crate::icons::Icon;
use crate::state::PageHandle;
use aviz_core::SectionId;
use aviz_core::content::{ADMISSION_STEPS, Glyph, school};
use leptos::prelude::*;

#[component]
pub fn Admissions(page: PageHandle) -> impl IntoView {
    let badge_text = format!("Admissions Open {}", school::ADMISSION_YEAR);
    let intro = format!(
        "Admissions are now open for the {} academic year. Join our community and watch your child soar.",
        school::ADMISSION_YEAR
    );

    view! {
        <section id=SectionId::Admissions.anchor() class="section admissions">
            <div class="container">
                <div class="section-header section-header-inverse">
                    <p class="admissions-badge">{badge_text}</p>
                    <h2 class="section-title">"Give Your Child the Feathers to Fly"</h2>
                    <p class="section-description">{intro}</p>
                </div>

                <div class="admissions-panel">
                    <h3 class="values-title">"Simple 3-Step Admission Process"</h3>
                    <ol class="steps-grid">
                        {ADMISSION_STEPS
                            .iter()
                            .map(|step| view! {
                                <li class="step">
                                    <span class="step-number">{step.step}</span>
                                    <h4 class="card-title">{step.title}</h4>
                                    <p class="card-text">{step.description}</p>
                                </li>
                            })
                            .collect::<Vec<_>>()}
                    </ol>
                    <div class="admissions-cta">
                        <button class="btn btn-primary btn-large" on:click=move |_| page.open_popup()>
                            "Start Your Journey"
                            <Icon glyph=Glyph::ChevronRight class="icon icon-sm" />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
