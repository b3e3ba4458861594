//! # aviz-prerender
//!
//! Renders the Aviz Convent School landing page to a single static HTML
//! document with Leptos SSR.
//!
//! The output is a complete first paint: every section, link and the map
//! embed work without JavaScript. When a browser bundle is configured the
//! document also loads it, and the bundle takes over the `#app` element to
//! add the popup, menu and smooth navigation behaviour.
//!
//! ```rust
//! use aviz_prerender::{SiteConfig, render_page};
//!
//! let html = render_page(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="admissions""#));
//! ```

pub mod config;
pub mod document;

pub use config::{BundleAssets, ConfigError, PageMeta, SiteConfig};

use document::SiteDocument;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

/// Render the complete page, including `<!DOCTYPE html>`.
pub fn render_page(config: &SiteConfig) -> String {
    // The app creates signals; give them an owner that is dropped with the render.
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <SiteDocument config=config.clone() /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aviz_core::DisclosureTiming;

    #[test]
    fn test_render_page_is_complete_document() {
        let html = render_page(&SiteConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains(r#"<meta charset="UTF-8""#));
        assert!(html.contains("<style>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_page_embeds_timing() {
        let config = SiteConfig {
            popup: DisclosureTiming {
                delay_ms: 4500,
                scroll_threshold: 250.0,
            },
            ..Default::default()
        };
        let html = render_page(&config);
        assert!(html.contains("data-disclosure="));
        assert!(html.contains("4500"));
        assert!(html.contains("250"));
    }

    #[test]
    fn test_render_page_without_bundle_has_no_module_script() {
        let html = render_page(&SiteConfig::default());
        assert!(!html.contains(r#"<script type="module">"#));
    }

    #[test]
    fn test_render_page_with_bundle_bootstraps_it() {
        let config = SiteConfig {
            bundle: BundleAssets {
                js: Some("/pkg/aviz_landing.js".into()),
                wasm: Some("/pkg/aviz_landing_bg.wasm".into()),
            },
            ..Default::default()
        };
        let html = render_page(&config);
        assert!(html.contains(r#"<script type="module">"#));
        assert!(html.contains(r#"import init from "/pkg/aviz_landing.js";"#));
        assert!(html.contains("/pkg/aviz_landing_bg.wasm"));
    }

    #[test]
    fn test_render_page_uses_configured_title() {
        let config = SiteConfig {
            page: PageMeta {
                title: "Open Day".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_page(&config);
        assert!(html.contains("<title>Open Day</title>"));
    }
}
