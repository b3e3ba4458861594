//! Root document component - the complete HTML page around the landing app.

use crate::config::SiteConfig;
use aviz_core::content::school;
use aviz_landing::App;
use aviz_landing::styles::SITE_CSS;
use leptos::prelude::*;

/// Id of the element the browser bundle mounts into.
pub const MOUNT_ID: &str = "app";

/// The complete HTML document: head metadata, inline styles, the prerendered
/// page and the optional bundle bootstrap.
#[component]
pub fn SiteDocument(config: SiteConfig) -> impl IntoView {
    // The browser bundle reads the popup timing back from this attribute.
    let timing_json = serde_json::to_string(&config.popup).unwrap_or_default();
    let timing = config.popup;
    let bootstrap = config.bundle.bootstrap();

    view! {
        <html lang=config.page.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content=config.page.description />
                <title>{config.page.title}</title>
                <link rel="icon" href=school::LOGO />
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div id=MOUNT_ID data-disclosure=timing_json>
                    <App timing=timing />
                </div>
                {bootstrap.map(|script| view! { <script type="module">{script}</script> })}
            </body>
        </html>
    }
}
