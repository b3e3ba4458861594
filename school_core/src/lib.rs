//! # aviz-core
//!
//! Content and interaction state for the Aviz Convent School single-page site.
//!
//! Nothing in this crate touches the browser. The page content lives in
//! [`content`] as `'static` arrays, and the only stateful behaviour of the
//! page (section navigation, the mobile menu, popup disclosure) lives in
//! [`page`] and [`popup`] as plain state machines. The Leptos components in
//! `aviz-landing` hold a [`PageState`] inside a signal and forward browser
//! events to it.
//!
//! ## Quick Start
//!
//! ```rust
//! use aviz_core::{PageState, SectionId, SectionScroller};
//!
//! struct Everywhere;
//! impl SectionScroller for Everywhere {
//!     fn scroll_into_view(&self, _section: SectionId) -> bool {
//!         true
//!     }
//! }
//!
//! let mut page = PageState::default();
//! page.toggle_menu();
//! page.navigate(SectionId::Contact, &Everywhere);
//!
//! assert_eq!(page.active_section(), SectionId::Contact);
//! assert!(!page.menu_open());
//! ```
//!
//! ## Modules
//!
//! - [`section`] - the six section anchors and the canonical navigation list
//! - [`content`] - every piece of copy, link and image shown on the page
//! - [`popup`] - the promotional popup disclosure state machine
//! - [`page`] - page-level state: active section, mobile menu, popup

#![warn(missing_docs)]

pub mod content;
pub mod page;
pub mod popup;
pub mod section;

pub use page::{PageState, SectionScroller};
pub use popup::{Disclosure, DisclosureTiming, Popup};
pub use section::{NAV_ITEMS, NavItem, SectionId};
