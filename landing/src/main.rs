// Aviz Convent School browser entry point (Leptos 0.8, csr)

use aviz_core::DisclosureTiming;
use aviz_landing::App;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

/// Element the prerendered page is served in.
const MOUNT_ID: &str = "app";
/// JSON-encoded [`DisclosureTiming`] written by the prerenderer.
const TIMING_ATTR: &str = "data-disclosure";

fn main() {
    console_error_panic_hook::set_once();

    let mount = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());

    match mount {
        Some(root) => {
            let timing = read_timing(&root);
            // Replace the static first paint with the live tree.
            root.set_inner_html("");
            leptos::mount::mount_to(root, move || view! { <App timing=timing /> }).forget();
        }
        None => leptos::mount::mount_to_body(|| view! { <App /> }),
    }
}

fn read_timing(root: &web_sys::HtmlElement) -> DisclosureTiming {
    let Some(raw) = root.get_attribute(TIMING_ATTR) else {
        return DisclosureTiming::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "[aviz] ignoring malformed {TIMING_ATTR}: {err}"
        )));
        DisclosureTiming::default()
    })
}
