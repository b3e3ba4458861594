use super::SectionLink;
use crate::icons::Icon;
use crate::state::PageHandle;
use aviz_core::NAV_ITEMS;
use aviz_core::content::{Glyph, school};
use leptos::prelude::*;

#[component]
pub fn Nav(page: PageHandle) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <div class="nav-brand">
                    <div class="nav-logo">
                        <img src=school::LOGO alt="Aviz Convent School logo" />
                    </div>
                    <div class="nav-brand-text">
                        <span class="nav-title">{school::NAME}</span>
                        <span class="nav-tagline">{school::TAGLINE}</span>
                    </div>
                </div>

                <div class="nav-links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <SectionLink page=page item=*item class="nav-link" highlight=true /> })
                        .collect::<Vec<_>>()}
                </div>

                <button class="btn btn-primary nav-cta" on:click=move |_| page.open_popup()>
                    "Apply Now"
                </button>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || if page.menu_open() { "true" } else { "false" }
                    on:click=move |_| page.toggle_menu()
                >
                    {move || {
                        let glyph = if page.menu_open() { Glyph::X } else { Glyph::Menu };
                        view! { <Icon glyph=glyph /> }
                    }}
                </button>
            </div>

            // Condensed list for narrow viewports
            <Show when=move || page.menu_open()>
                <div class="nav-mobile">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <SectionLink page=page item=*item class="nav-mobile-link" /> })
                        .collect::<Vec<_>>()}
                    <button
                        class="btn btn-primary btn-block"
                        on:click=move |_| page.open_popup_from_menu()
                    >
                        "Apply Now"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
