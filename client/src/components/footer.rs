//! Site footer: brand blurb, link columns, social links, legal links.

use leptos::prelude::*;

use crate::content::{COPYRIGHT, FOOTER_COLUMNS, LEGAL_LINKS, PRODUCT_NAME, SOCIAL_LINKS, TAGLINE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <div class="footer__logo">
                        <span aria-hidden="true">"🤖"</span>
                        <span>{PRODUCT_NAME}</span>
                    </div>
                    <p>{TAGLINE}</p>
                </div>
                {FOOTER_COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div class="footer__column">
                                <h3>{column.heading}</h3>
                                <ul>
                                    {column
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="footer__column">
                    <h3>"Connect"</h3>
                    <div class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.href aria-label=link.label>{link.label}</a> })
                            .collect_view()}
                    </div>
                    <p>"Stay updated with our newsletter"</p>
                </div>
            </div>
            <div class="footer__bottom">
                <span class="footer__copyright">{COPYRIGHT}</span>
                <div class="footer__legal">
                    {LEGAL_LINKS.iter().map(|link| view! { <a href=link.href>{link.label}</a> }).collect_view()}
                </div>
            </div>
        </footer>
    }
}
