use crate::icons::Icon;
use crate::state::PageHandle;
use aviz_core::SectionId;
use aviz_core::content::{Glyph, contact, school};
use leptos::prelude::*;

/// Promotional admissions dialog. Only in the document while visible.
#[component]
pub fn Popup(page: PageHandle) -> impl IntoView {
    let year_text = format!("{} Academic Year", school::ADMISSION_YEAR);

    view! {
        <Show when=move || page.popup_visible()>
            <div class="popup" role="dialog" aria-modal="true" aria-labelledby="popup-title">
                <div class="popup-backdrop" on:click=move |_| page.dismiss_popup()></div>
                <div class="popup-panel">
                    <button
                        class="popup-close"
                        aria-label="Close"
                        on:click=move |_| page.dismiss_popup()
                    >
                        <Icon glyph=Glyph::X class="icon icon-sm" />
                    </button>

                    <div class="popup-header">
                        <div class="popup-emblem">
                            <Icon glyph=Glyph::Feather class="icon icon-lg" />
                        </div>
                        <h3 id="popup-title" class="popup-title">"Admissions Open"</h3>
                        <p class="popup-subtitle">"Give Your Child the Feathers to Fly"</p>
                        <p class="popup-year">{year_text.clone()}</p>
                    </div>

                    <div class="popup-actions">
                        <button
                            class="btn btn-primary btn-block"
                            on:click=move |_| page.popup_action(SectionId::Admissions)
                        >
                            "Apply Now"
                            <Icon glyph=Glyph::ArrowRight class="icon icon-sm" />
                        </button>
                        <a href=contact::PHONE_HREF class="btn btn-call btn-block">
                            <Icon glyph=Glyph::Phone class="icon icon-sm" />
                            "Call Now"
                        </a>
                        <button
                            class="btn btn-muted btn-block"
                            on:click=move |_| page.popup_action(SectionId::Contact)
                        >
                            <Icon glyph=Glyph::Mail class="icon icon-sm" />
                            "Contact Us"
                        </button>
                    </div>

                    <p class="popup-note">"Limited seats available. Enquire today!"</p>
                </div>
            </div>
        </Show>
    }
}
