//! Promotional popup disclosure.
//!
//! The popup surfaces on its own exactly once per page lifetime, on
//! whichever disclosure trigger fires first: the auto-show timer or the
//! visitor scrolling past a threshold. Both triggers consult the same
//! [`Disclosure`] value, so the second one to fire is a no-op. After that,
//! visibility is driven only by explicit calls to action and dismissals.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Whether the popup has already surfaced on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    /// No trigger has fired yet.
    #[default]
    NotShown,
    /// A trigger fired; later triggers are ignored.
    Shown,
}

/// When the disclosure triggers fire.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosureTiming {
    /// Delay after mount before the timer trigger fires, in milliseconds.
    pub delay_ms: u64,
    /// Vertical scroll offset (px) that must be exceeded for the scroll trigger.
    pub scroll_threshold: f64,
}

impl DisclosureTiming {
    /// Timer delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for DisclosureTiming {
    fn default() -> Self {
        Self {
            delay_ms: 3000,
            scroll_threshold: 500.0,
        }
    }
}

/// Popup state: the one-shot disclosure plus the visibility flag on top of it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Popup {
    disclosure: Disclosure,
    visible: bool,
}

impl Popup {
    /// Timer trigger. Returns `true` if this call disclosed the popup.
    pub fn on_timer_elapsed(&mut self) -> bool {
        self.disclose()
    }

    /// Scroll trigger. Discloses only when `offset` is strictly above
    /// `threshold`. Returns `true` if this call disclosed the popup.
    pub fn on_scroll(&mut self, offset: f64, threshold: f64) -> bool {
        if offset > threshold {
            self.disclose()
        } else {
            false
        }
    }

    /// Explicit call to action. Not gated by the disclosure state.
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Close button, backdrop click or one of the popup's own actions.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Whether the dialog is currently on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current disclosure state.
    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    /// `true` once either trigger has fired.
    pub fn already_shown(&self) -> bool {
        self.disclosure == Disclosure::Shown
    }

    fn disclose(&mut self) -> bool {
        match self.disclosure {
            Disclosure::Shown => false,
            Disclosure::NotShown => {
                self.disclosure = Disclosure::Shown;
                self.visible = true;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const THRESHOLD: f64 = 500.0;

    #[test]
    fn starts_hidden_and_not_shown() {
        let popup = Popup::default();
        assert!(!popup.is_visible());
        assert!(!popup.already_shown());
        assert_eq!(popup.disclosure(), Disclosure::NotShown);
    }

    #[test]
    fn timer_discloses_once() {
        let mut popup = Popup::default();
        assert!(popup.on_timer_elapsed());
        assert!(popup.is_visible());
        assert!(popup.already_shown());

        popup.dismiss();
        assert!(!popup.on_timer_elapsed());
        assert!(!popup.is_visible());
    }

    #[test]
    fn scroll_below_or_at_threshold_does_nothing() {
        let mut popup = Popup::default();
        assert!(!popup.on_scroll(120.0, THRESHOLD));
        assert!(!popup.on_scroll(THRESHOLD, THRESHOLD));
        assert_eq!(popup, Popup::default());
    }

    #[test]
    fn scroll_past_threshold_discloses() {
        let mut popup = Popup::default();
        assert!(popup.on_scroll(600.0, THRESHOLD));
        assert!(popup.is_visible());
        assert!(popup.already_shown());
    }

    #[test]
    fn scroll_first_then_timer_is_noop() {
        let mut popup = Popup::default();
        assert!(popup.on_scroll(600.0, THRESHOLD));
        let after_scroll = popup;

        assert!(!popup.on_timer_elapsed());
        assert_eq!(popup, after_scroll);
    }

    #[test]
    fn timer_first_then_scroll_does_not_reopen_dismissed_popup() {
        let mut popup = Popup::default();
        popup.on_timer_elapsed();
        popup.dismiss();

        assert!(!popup.on_scroll(900.0, THRESHOLD));
        assert!(!popup.is_visible());
        assert!(popup.already_shown());
    }

    #[test]
    fn dismiss_keeps_disclosure() {
        let mut popup = Popup::default();
        popup.on_timer_elapsed();
        popup.dismiss();
        assert!(!popup.is_visible());
        assert_eq!(popup.disclosure(), Disclosure::Shown);
    }

    #[test]
    fn open_is_ungated() {
        let mut popup = Popup::default();
        popup.on_timer_elapsed();
        popup.dismiss();
        popup.open();
        assert!(popup.is_visible());

        popup.dismiss();
        popup.open();
        assert!(popup.is_visible());
    }

    #[test]
    fn open_before_any_trigger_leaves_disclosure_pending() {
        let mut popup = Popup::default();
        popup.open();
        assert!(popup.is_visible());
        assert!(!popup.already_shown());

        popup.dismiss();
        assert!(popup.on_timer_elapsed());
        assert!(popup.is_visible());
    }

    #[test]
    fn default_timing() {
        let timing = DisclosureTiming::default();
        assert_eq!(timing.delay(), Duration::from_secs(3));
        assert_eq!(timing.scroll_threshold, 500.0);
    }

    #[test]
    fn timing_json_fills_missing_fields() {
        let timing: DisclosureTiming =
            serde_json::from_str(r#"{"delay_ms":1500}"#).expect("parse timing");
        assert_eq!(timing.delay_ms, 1500);
        assert_eq!(timing.scroll_threshold, 500.0);
    }
}
