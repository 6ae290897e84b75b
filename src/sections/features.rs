use leptos::prelude::*;

use crate::content::{Feature, FEATURES};
use crate::icons::Icon;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Why Swifthaul"</p>
                    <h2 class="section-title">"Built for the city's pace"</h2>
                    <p class="section-description">
                        "Everything between \"book\" and \"delivered\" is our problem, not yours."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <article class="feature-card" data-feature=feature.id>
            <div class="feature-icon">
                <Icon path=feature.icon size="28" />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
