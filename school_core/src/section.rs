//! Section anchors and the canonical navigation list.

use std::fmt;

/// One of the six in-page anchors.
///
/// Used both as the scroll target (the element id) and as the highlight
/// state of the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Hero section at the top of the page.
    #[default]
    Home,
    /// About our school.
    About,
    /// Philosophy pillars and core values.
    Philosophy,
    /// Facilities list and photographs.
    Facilities,
    /// Admission steps.
    Admissions,
    /// Contact details and map.
    Contact,
}

impl SectionId {
    /// All sections in display order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Philosophy,
        SectionId::Facilities,
        SectionId::Admissions,
        SectionId::Contact,
    ];

    /// Element id of the section in the rendered document.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Philosophy => "philosophy",
            SectionId::Facilities => "facilities",
            SectionId::Admissions => "admissions",
            SectionId::Contact => "contact",
        }
    }

    /// `#anchor` form, for plain `href`s.
    pub fn fragment(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// A navigation link: target section plus display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Section the link scrolls to.
    pub id: SectionId,
    /// Text shown on the link.
    pub label: &'static str,
}

/// The canonical navigation list.
///
/// The navigation bar (desktop and mobile) and the footer quick links both
/// render from this list, so their labels cannot drift apart.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { id: SectionId::Home, label: "Home" },
    NavItem { id: SectionId::About, label: "About" },
    NavItem { id: SectionId::Philosophy, label: "Philosophy" },
    NavItem { id: SectionId::Facilities, label: "Facilities" },
    NavItem { id: SectionId::Admissions, label: "Admissions" },
    NavItem { id: SectionId::Contact, label: "Contact" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn nav_items_cover_every_section_once_in_order() {
        let ids: Vec<SectionId> = NAV_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn anchors_are_unique() {
        let anchors: HashSet<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), 6);
    }

    #[test]
    fn display_and_fragment_use_anchor() {
        assert_eq!(SectionId::Admissions.to_string(), "admissions");
        assert_eq!(SectionId::Contact.fragment(), "#contact");
    }

    #[test]
    fn default_section_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }
}
