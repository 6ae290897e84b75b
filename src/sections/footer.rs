use leptos::prelude::*;

use crate::content::{FooterColumn, BRAND, FOOTER_COLUMNS, SOCIAL_LINKS};
use crate::icons::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand">
                        <img src="assets/logo.svg" alt="" class="footer-logo" />
                        <span class="footer-title">{BRAND}</span>
                        <p class="footer-tagline">"Logistics that keeps your city moving."</p>
                    </div>
                    <div class="footer-columns">
                        {FOOTER_COLUMNS
                            .iter()
                            .map(|column| view! { <FooterColumnView column=column /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">{format!("(c) 2025 {BRAND} Logistics Pvt. Ltd.")}</p>
                    <div class="footer-social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    class="social-link"
                                    aria-label=link.label
                                >
                                    <Icon path=link.icon size="20" />
                                </a>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumnView(column: &'static FooterColumn) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h3 class="footer-column-title">{column.title}</h3>
            <ul class="footer-links">
                {column
                    .links
                    .iter()
                    .map(|link| view! {
                        <li>
                            <a href=link.href class="footer-link">{link.label}</a>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
