//! Page-level interaction state.
//!
//! [`PageState`] is the whole mutable state of the page: which section is
//! highlighted, whether the mobile menu is open, and the popup. Every
//! browser event the page reacts to maps onto exactly one method here.

use crate::popup::{DisclosureTiming, Popup};
use crate::section::SectionId;

/// Brings a section into view.
///
/// Implemented over the DOM in the browser and by recording fakes in tests.
pub trait SectionScroller {
    /// Smoothly scroll to `section`. Returns `false` if the page has no
    /// element for it, in which case nothing moved.
    fn scroll_into_view(&self, section: SectionId) -> bool;
}

/// Transient UI state, created with fixed defaults at mount.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageState {
    active: SectionId,
    menu_open: bool,
    popup: Popup,
    timing: DisclosureTiming,
}

impl PageState {
    /// Fresh state with custom disclosure timing.
    pub fn new(timing: DisclosureTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    /// Scroll to `section` and record it as active.
    ///
    /// A missing target leaves the active section untouched. The mobile menu
    /// and the popup are closed either way. Returns whether the target existed.
    pub fn navigate(&mut self, section: SectionId, scroller: &impl SectionScroller) -> bool {
        let found = scroller.scroll_into_view(section);
        if found {
            self.active = section;
        }
        self.menu_open = false;
        self.popup.dismiss();
        found
    }

    /// One of the popup's own navigation buttons ("Apply Now", "Contact Us").
    pub fn popup_action(&mut self, section: SectionId, scroller: &impl SectionScroller) -> bool {
        self.popup.dismiss();
        self.navigate(section, scroller)
    }

    /// Hamburger button.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Call to action outside the mobile menu.
    pub fn open_popup(&mut self) {
        self.popup.open();
    }

    /// "Apply Now" inside the mobile menu: opens the popup, closes the menu.
    pub fn open_popup_from_menu(&mut self) {
        self.popup.open();
        self.menu_open = false;
    }

    /// Close button or backdrop click.
    pub fn dismiss_popup(&mut self) {
        self.popup.dismiss();
    }

    /// Auto-show timer fired.
    pub fn on_timer_elapsed(&mut self) -> bool {
        self.popup.on_timer_elapsed()
    }

    /// Window scrolled to vertical `offset`.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.popup.on_scroll(offset, self.timing.scroll_threshold)
    }

    /// Section currently highlighted in the navigation bar.
    pub fn active_section(&self) -> SectionId {
        self.active
    }

    /// Whether the condensed mobile menu is shown.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Popup state.
    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    /// Disclosure timing this page was created with.
    pub fn timing(&self) -> DisclosureTiming {
        self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Scroller over a fixed set of existing targets, recording every call.
    struct FakeDom {
        present: Vec<SectionId>,
        calls: RefCell<Vec<SectionId>>,
    }

    impl FakeDom {
        fn with_all() -> Self {
            Self::with(&SectionId::ALL)
        }

        fn with(present: &[SectionId]) -> Self {
            Self {
                present: present.to_vec(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionScroller for FakeDom {
        fn scroll_into_view(&self, section: SectionId) -> bool {
            self.calls.borrow_mut().push(section);
            self.present.contains(&section)
        }
    }

    fn busy_page() -> PageState {
        let mut page = PageState::default();
        page.toggle_menu();
        page.open_popup();
        page
    }

    #[test]
    fn defaults_at_mount() {
        let page = PageState::default();
        assert_eq!(page.active_section(), SectionId::Home);
        assert!(!page.menu_open());
        assert!(!page.popup().is_visible());
        assert!(!page.popup().already_shown());
        assert_eq!(page.timing(), DisclosureTiming::default());
    }

    #[test]
    fn navigate_to_every_existing_section() {
        let dom = FakeDom::with_all();
        for section in SectionId::ALL {
            let mut page = busy_page();
            assert!(page.navigate(section, &dom));
            assert_eq!(page.active_section(), section);
            assert!(!page.menu_open());
            assert!(!page.popup().is_visible());
        }
        assert_eq!(*dom.calls.borrow(), SectionId::ALL.to_vec());
    }

    #[test]
    fn navigate_to_missing_target_keeps_active_but_closes_overlays() {
        let dom = FakeDom::with(&[SectionId::About]);
        let mut page = busy_page();
        page.navigate(SectionId::About, &dom);
        page.toggle_menu();
        page.open_popup();

        assert!(!page.navigate(SectionId::Facilities, &dom));
        assert_eq!(page.active_section(), SectionId::About);
        assert!(!page.menu_open());
        assert!(!page.popup().is_visible());
    }

    #[test]
    fn navigation_does_not_touch_disclosure() {
        let dom = FakeDom::with_all();
        let mut page = PageState::default();
        page.navigate(SectionId::Contact, &dom);
        assert!(!page.popup().already_shown());
        assert!(page.on_timer_elapsed());
    }

    #[test]
    fn menu_toggles() {
        let mut page = PageState::default();
        page.toggle_menu();
        assert!(page.menu_open());
        page.toggle_menu();
        assert!(!page.menu_open());
    }

    #[test]
    fn apply_from_menu_opens_popup_and_closes_menu() {
        let mut page = PageState::default();
        page.toggle_menu();
        page.open_popup_from_menu();
        assert!(page.popup().is_visible());
        assert!(!page.menu_open());
    }

    #[test]
    fn popup_action_dismisses_and_navigates() {
        let dom = FakeDom::with_all();
        let mut page = PageState::default();
        page.on_timer_elapsed();

        assert!(page.popup_action(SectionId::Admissions, &dom));
        assert_eq!(page.active_section(), SectionId::Admissions);
        assert!(!page.popup().is_visible());
        assert!(page.popup().already_shown());
    }

    #[test]
    fn dismiss_keeps_already_shown() {
        let mut page = PageState::default();
        page.on_scroll(700.0);
        page.dismiss_popup();
        assert!(!page.popup().is_visible());
        assert!(page.popup().already_shown());
    }

    #[test]
    fn scroll_uses_configured_threshold() {
        let mut page = PageState::new(DisclosureTiming {
            delay_ms: 3000,
            scroll_threshold: 1200.0,
        });
        assert!(!page.on_scroll(600.0));
        assert!(page.on_scroll(1201.0));
    }

    /// Events on a timeline in abstract time units; the timer is due at 3.
    enum Event {
        Tick(u32),
        Scroll(u32, f64),
    }

    fn replay(events: &[Event]) -> Vec<(u32, bool)> {
        const DELAY: u32 = 3;
        let mut page = PageState::default();
        let mut timer_fired = false;
        let mut transitions = Vec::new();
        for event in events {
            let (at, disclosed) = match *event {
                Event::Tick(at) if at >= DELAY && !timer_fired => {
                    timer_fired = true;
                    (at, page.on_timer_elapsed())
                }
                Event::Tick(at) => (at, false),
                Event::Scroll(at, offset) => (at, page.on_scroll(offset)),
            };
            if disclosed {
                transitions.push((at, page.popup().is_visible()));
            }
        }
        transitions
    }

    #[test]
    fn mount_then_wait_discloses_exactly_once() {
        let transitions = replay(&[
            Event::Tick(1),
            Event::Tick(2),
            Event::Tick(3),
            Event::Tick(4),
        ]);
        assert_eq!(transitions, vec![(3, true)]);
    }

    #[test]
    fn early_scroll_wins_and_timer_is_ignored() {
        let transitions = replay(&[
            Event::Scroll(1, 600.0),
            Event::Tick(2),
            Event::Tick(3),
            Event::Scroll(4, 900.0),
        ]);
        assert_eq!(transitions, vec![(1, true)]);
    }

    #[test]
    fn nothing_before_either_trigger() {
        let mut page = PageState::default();
        page.on_scroll(250.0);
        assert!(!page.popup().is_visible());
        assert!(!page.popup().already_shown());
    }
}
