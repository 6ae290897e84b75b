use leptos::prelude::*;

use crate::content::{Service, SERVICES};
use crate::icons::Icon;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Services"</p>
                    <h2 class="section-title">"One fleet for every load"</h2>
                    <p class="section-description">
                        "From a single envelope on a bike to a full household on a lorry."
                    </p>
                </div>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|service| view! { <ServiceCard service=service /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <article class="service-card" data-service=service.id>
            <div class="service-icon">
                <Icon path=service.icon size="32" />
            </div>
            <h3 class="service-title">{service.title}</h3>
            <p class="service-description">{service.description}</p>
        </article>
    }
}
