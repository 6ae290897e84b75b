use leptos::prelude::*;

use crate::content::{BRAND, NAV_LINKS};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <a href="/" class="header-brand">
                    <img src="assets/logo.svg" alt="" class="header-logo" />
                    <span class="header-title">{BRAND}</span>
                </a>
                <nav class="header-nav" aria-label="Primary">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href class="nav-link">{link.label}</a>
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </div>
        </header>
    }
}
