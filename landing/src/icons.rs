//! Inline SVG icons.
//!
//! Stroke icons on a 24x24 grid, drawn after the Lucide set. Each glyph is
//! a list of path `d` strings rendered with the current text colour.

use aviz_core::content::Glyph;
use leptos::prelude::*;

/// Renders `glyph` as an inline SVG.
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Phone class="icon icon-sm" /> }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw
    glyph: Glyph,
    /// CSS classes on the `<svg>` element
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {glyph_paths(glyph)
                .iter()
                .map(|d| view! { <path d=*d></path> })
                .collect::<Vec<_>>()}
        </svg>
    }
}

/// Path data for `glyph`.
pub fn glyph_paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        Glyph::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 6-10 7L2 6",
        ],
        Glyph::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
        ],
        Glyph::Clock => &["M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z", "M12 6v6l4 2"],
        Glyph::GraduationCap => &["M22 10v6M2 10l10-5 10 5-10 5z", "M6 12v5c3 3 9 3 12 0v-5"],
        Glyph::Heart => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
        ],
        Glyph::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Glyph::BookOpen => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        Glyph::Award => &[
            "M18 8a6 6 0 1 1-12 0 6 6 0 0 1 12 0z",
            "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
        ],
        Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Glyph::X => &["M18 6 6 18", "m6 6 12 12"],
        Glyph::ChevronRight => &["m9 18 6-6-6-6"],
        Glyph::Star => &[
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        ],
        Glyph::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        Glyph::Calendar => &[
            "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M16 2v4",
            "M8 2v4",
            "M3 10h18",
        ],
        Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Glyph::Feather => &[
            "M20.24 12.24a6 6 0 0 0-8.49-8.49L5 10.5V19h8.5z",
            "M16 8 2 22",
            "M17.5 15H9",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Glyph; 17] = [
        Glyph::Phone,
        Glyph::Mail,
        Glyph::MapPin,
        Glyph::Clock,
        Glyph::GraduationCap,
        Glyph::Heart,
        Glyph::Users,
        Glyph::BookOpen,
        Glyph::Award,
        Glyph::Menu,
        Glyph::X,
        Glyph::ChevronRight,
        Glyph::Star,
        Glyph::CheckCircle,
        Glyph::Calendar,
        Glyph::ArrowRight,
        Glyph::Feather,
    ];

    #[test]
    fn every_glyph_has_path_data() {
        for glyph in ALL {
            let paths = glyph_paths(glyph);
            assert!(!paths.is_empty(), "{glyph:?} has no paths");
            assert!(
                paths.iter().all(|d| d.starts_with(['M', 'm'])),
                "{glyph:?} path must start with a move command"
            );
        }
    }
}
