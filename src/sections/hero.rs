use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::content::{DEFAULT_CITY, SERVICE_OPTIONS, TAGLINE};
use crate::icons::{Icon, ICON_MAP_PIN};

#[component]
pub fn Hero() -> impl IntoView {
    let badge_text = format!("Now live in {DEFAULT_CITY}");
    view! {
        <section id="hero" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            {badge_text}
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Move anything"</span>
                            <br />
                            "across the city."
                        </h1>
                        <p class="hero-description">{TAGLINE}</p>
                        <div class="hero-actions">
                            <a href="#services" class="btn btn-secondary">
                                "Explore services"
                            </a>
                        </div>
                    </div>
                    <EstimateCard />
                </div>
            </div>
        </section>
    }
}

#[component]
fn EstimateCard() -> impl IntoView {
    // Booking flow is not wired up yet; the button only records the click.
    let request_estimate = move |_| {
        web_sys::console::log_1(&JsValue::from_str(
            "estimate requested — booking flow not implemented",
        ));
    };

    view! {
        <div class="hero-estimate">
            <h2 class="estimate-heading">"What are we moving today?"</h2>
            <div class="estimate-city">
                <Icon path=ICON_MAP_PIN size="20" class="icon-sm" />
                <span>{DEFAULT_CITY}</span>
            </div>
            <label class="estimate-label" for="estimate-service">"Service"</label>
            <select id="estimate-service" class="estimate-select">
                {SERVICE_OPTIONS
                    .iter()
                    .map(|option| view! {
                        <option value=*option>{*option}</option>
                    })
                    .collect::<Vec<_>>()}
            </select>
            <button class="btn btn-primary estimate-submit" on:click=request_estimate>
                "Get an Estimate"
            </button>
        </div>
    }
}
