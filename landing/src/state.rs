//! Signal-backed page state shared by the section components.

use crate::dom::DomScroller;
use aviz_core::{DisclosureTiming, PageState, SectionId};
use leptos::prelude::*;

/// Copyable handle over the page's [`PageState`] signal.
///
/// Every click handler and trigger goes through one of these methods, so the
/// state transitions themselves stay in `aviz-core`.
#[derive(Clone, Copy)]
pub struct PageHandle {
    state: RwSignal<PageState>,
}

impl PageHandle {
    /// Fresh page state at mount.
    pub fn new(timing: DisclosureTiming) -> Self {
        Self {
            state: RwSignal::new(PageState::new(timing)),
        }
    }

    /// Smooth-scroll to `section`, closing the menu and the popup.
    pub fn navigate(self, section: SectionId) {
        self.state.update(|page| {
            page.navigate(section, &DomScroller);
        });
    }

    /// Popup button that leads to a section.
    pub fn popup_action(self, section: SectionId) {
        self.state.update(|page| {
            page.popup_action(section, &DomScroller);
        });
    }

    /// Hamburger button.
    pub fn toggle_menu(self) {
        self.state.update(PageState::toggle_menu);
    }

    /// Call to action outside the mobile menu.
    pub fn open_popup(self) {
        self.state.update(PageState::open_popup);
    }

    /// "Apply Now" inside the mobile menu.
    pub fn open_popup_from_menu(self) {
        self.state.update(PageState::open_popup_from_menu);
    }

    /// Close button or backdrop click.
    pub fn dismiss_popup(self) {
        self.state.update(PageState::dismiss_popup);
    }

    /// Auto-show timer fired. Ignored once the page is torn down.
    pub fn timer_elapsed(self) {
        self.apply_trigger(PageState::on_timer_elapsed);
    }

    /// Window scrolled. Only a scroll that actually discloses the popup
    /// writes to the signal, so ordinary scrolling never notifies subscribers.
    pub fn scrolled(self, offset: f64) {
        self.apply_trigger(|page| page.on_scroll(offset));
    }

    /// Whether `section` is the highlighted one. Tracked.
    pub fn is_active(self, section: SectionId) -> bool {
        self.state.with(|page| page.active_section() == section)
    }

    /// Whether the mobile menu is open. Tracked.
    pub fn menu_open(self) -> bool {
        self.state.with(|page| page.menu_open())
    }

    /// Whether the popup is on screen. Tracked.
    pub fn popup_visible(self) -> bool {
        self.state.with(|page| page.popup().is_visible())
    }

    /// Disclosure timing, read without tracking.
    pub fn timing(self) -> DisclosureTiming {
        self.state.with_untracked(|page| page.timing())
    }

    fn apply_trigger(self, trigger: impl Fn(&mut PageState) -> bool) {
        // Dry-run on a copy first; a disposed signal yields `None`.
        let discloses = self.state.try_with_untracked(|page| {
            let mut probe = *page;
            trigger(&mut probe)
        });
        if discloses == Some(true) {
            // `None` here means the page was torn down in between.
            self.state.try_update(|page| trigger(page));
        }
    }
}
