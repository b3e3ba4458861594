//! # aviz-landing
//!
//! Leptos components for the Aviz Convent School single-page site.
//!
//! The same component tree serves two builds:
//!
//! - **`csr`** - the browser bundle (`src/main.rs`), which mounts [`App`]
//!   live into the page and arms the popup disclosure triggers.
//! - **`ssr`** - static rendering from `aviz-prerender`, which turns [`App`]
//!   into plain markup for the first paint. Effects never run there, so no
//!   browser API is touched.
//!
//! ## Architecture
//!
//! - [`state`] - [`PageHandle`], the signal-backed page state passed to sections
//! - [`dom`] - browser bindings: DOM scroller, timer and scroll subscriptions
//! - [`sections`] - one component per page section
//! - [`icons`] - inline SVG glyphs
//! - [`styles`] - the site stylesheet

pub mod dom;
pub mod icons;
pub mod sections;
pub mod state;
pub mod styles;

use aviz_core::DisclosureTiming;
use leptos::prelude::*;
use sections::*;

pub use state::PageHandle;

/// The whole page.
#[component]
pub fn App(
    /// Auto-show delay and scroll threshold for the promotional popup
    #[prop(optional)]
    timing: DisclosureTiming,
) -> impl IntoView {
    let page = PageHandle::new(timing);

    // Acquire the disclosure triggers for the lifetime of the page.
    Effect::new(move |_| {
        let triggers = dom::DisclosureTriggers::arm(page);
        on_cleanup(move || triggers.release());
    });

    view! {
        <div class="site">
            <Nav page=page />
            <main>
                <Hero page=page />
                <About />
                <Philosophy />
                <Facilities />
                <Testimonials />
                <Admissions page=page />
                <Contact />
            </main>
            <Footer page=page />
            <Popup page=page />
        </div>
    }
}
