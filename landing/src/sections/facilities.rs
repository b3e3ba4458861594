use crate::icons::Icon;
use aviz_core::SectionId;
use aviz_core::content::{FACILITIES, FACILITY_PHOTOS, Glyph, Photo};
use leptos::prelude::*;

#[component]
pub fn Facilities() -> impl IntoView {
    // Two staggered columns: photos 0-1 on the left, 2-3 on the right.
    let photos: &'static [Photo] = &FACILITY_PHOTOS;
    let (left, right) = photos.split_at(2);

    view! {
        <section id=SectionId::Facilities.anchor() class="section facilities">
            <div class="container">
                <div class="facilities-grid">
                    <div>
                        <p class="section-eyebrow">"Our Facilities"</p>
                        <h2 class="section-title">"Quality Infrastructure for Quality Education"</h2>
                        <p class="section-description">
                            "We provide a conducive learning environment with practical facilities that "
                            "support our students' academic and personal growth."
                        </p>
                        <ul class="facility-list">
                            {FACILITIES
                                .iter()
                                .map(|facility| view! {
                                    <li class="facility-item">
                                        <span class="facility-icon">
                                            <Icon glyph=Glyph::CheckCircle class="icon icon-sm" />
                                        </span>
                                        <span>{*facility}</span>
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div class="photo-mosaic">
                        <PhotoColumn photos=left offset=false />
                        <PhotoColumn photos=right offset=true />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PhotoColumn(photos: &'static [Photo], offset: bool) -> impl IntoView {
    let class = if offset { "photo-column photo-column-offset" } else { "photo-column" };
    view! {
        <div class=class>
            {photos
                .iter()
                .map(|photo| view! {
                    <div class="photo-frame">
                        <img src=photo.src alt=photo.alt loading="lazy" />
                    </div>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
