use super::SectionLink;
use super::contact::HoursTable;
use crate::icons::Icon;
use crate::state::PageHandle;
use aviz_core::NAV_ITEMS;
use aviz_core::content::{Glyph, contact, school};
use leptos::prelude::*;

#[component]
pub fn Footer(page: PageHandle) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-brand-row">
                            <div class="footer-logo">
                                <img src=school::LOGO alt="Aviz Convent School logo" />
                            </div>
                            <div>
                                <p class="footer-title">{school::NAME}</p>
                                <p class="footer-tagline">{school::TAGLINE}</p>
                            </div>
                        </div>
                        <p class="footer-summary">{school::SUMMARY}</p>
                        <div class="footer-social">
                            <a href=contact::PHONE_HREF class="footer-social-link" aria-label="Call the school">
                                <Icon glyph=Glyph::Phone class="icon icon-sm" />
                            </a>
                            <a href=contact::EMAIL_HREF class="footer-social-link" aria-label="Email the school">
                                <Icon glyph=Glyph::Mail class="icon icon-sm" />
                            </a>
                        </div>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Quick Links"</h4>
                        <ul class="footer-links">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| view! {
                                    <li>
                                        <SectionLink page=page item=*item class="footer-link" chevron=true />
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">"School Hours"</h4>
                        <HoursTable class="hours-table hours-table-dark" />
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© 2024 {}. All rights reserved.", school::NAME)}</p>
                    <p>{school::CREDENTIALS}</p>
                </div>
            </div>
        </footer>
    }
}
