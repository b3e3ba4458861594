use crate::icons::Icon;
use crate::state::PageHandle;
use aviz_core::NavItem;
use aviz_core::content::Glyph;
use leptos::ev;
use leptos::prelude::*;

/// Link to an in-page section.
///
/// Carries a real `#anchor` href so the prerendered page still jumps to the
/// section before the bundle loads; once it has, the click is routed through
/// the page state instead (smooth scroll, highlight, closes menu and popup).
#[component]
pub fn SectionLink(
    page: PageHandle,
    item: NavItem,
    class: &'static str,
    /// Append `active` while this section is the highlighted one
    #[prop(optional)]
    highlight: bool,
    /// Leading chevron, as in the footer quick links
    #[prop(optional)]
    chevron: bool,
) -> impl IntoView {
    let class_list = move || {
        if highlight && page.is_active(item.id) {
            format!("{class} active")
        } else {
            class.to_string()
        }
    };

    view! {
        <a
            href=item.id.fragment()
            class=class_list
            data-section=item.id.anchor()
            on:click=move |event: ev::MouseEvent| {
                event.prevent_default();
                page.navigate(item.id);
            }
        >
            {chevron.then(|| view! { <Icon glyph=Glyph::ChevronRight class="icon icon-xs" /> })}
            <span class="link-label">{item.label}</span>
        </a>
    }
}
