//! Browser bindings: scrolling sections into view and the popup triggers.

use crate::state::PageHandle;
use aviz_core::{SectionId, SectionScroller};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// [`SectionScroller`] over the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomScroller;

impl SectionScroller for DomScroller {
    fn scroll_into_view(&self, section: SectionId) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(section.anchor()))
        else {
            return false;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Current vertical scroll offset of the window.
pub fn scroll_offset() -> Option<f64> {
    web_sys::window().and_then(|window| window.scroll_y().ok())
}

/// The two disclosure triggers, held for the lifetime of the page.
///
/// The timer is not cancelled when the scroll trigger wins; the shared
/// disclosure state turns it into a no-op instead. Both are cancelled in
/// [`release`](Self::release), after which nothing touches the page state.
pub struct DisclosureTriggers {
    timer: Option<TimeoutHandle>,
    scroll: WindowListenerHandle,
}

impl DisclosureTriggers {
    /// Start the auto-show timer and subscribe to window scrolling.
    pub fn arm(page: PageHandle) -> Self {
        let timer = match set_timeout_with_handle(move || page.timer_elapsed(), page.timing().delay()) {
            Ok(handle) => Some(handle),
            Err(err) => {
                web_sys::console::warn_2(&JsValue::from_str("[aviz] popup timer not armed:"), &err);
                None
            }
        };

        let scroll = window_event_listener(ev::scroll, move |_| {
            if let Some(offset) = scroll_offset() {
                page.scrolled(offset);
            }
        });

        Self { timer, scroll }
    }

    /// Clear the timer and remove the scroll listener.
    pub fn release(self) {
        if let Some(timer) = self.timer {
            timer.clear();
        }
        self.scroll.remove();
    }
}
