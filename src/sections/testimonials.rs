use leptos::prelude::*;

use crate::content::{Testimonial, TESTIMONIALS};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Customers"</p>
                    <h2 class="section-title">"Moving the people who move things"</h2>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial-card" data-testimonial=testimonial.id>
            <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
            <figcaption class="testimonial-attribution">
                <img src=testimonial.avatar alt="" class="testimonial-avatar" />
                <div class="testimonial-person">
                    <span class="testimonial-name">{testimonial.name}</span>
                    <span class="testimonial-role">{testimonial.role}</span>
                </div>
            </figcaption>
        </figure>
    }
}
