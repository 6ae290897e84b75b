//! # swifthaul-landing
//!
//! Static marketing page for Swifthaul, a city logistics brand.
//!
//! The page is a straight line from data to markup: typed literal lists in
//! [`content`] feed the presentational components in [`sections`], and
//! [`App`] stacks the sections in a fixed vertical order. Nothing is fetched,
//! persisted or recomputed; the only interactive element is the estimate
//! button in the hero, a placeholder for a booking flow that does not exist
//! yet.
//!
//! Built with [Leptos](https://leptos.dev/) in CSR mode and served by Trunk;
//! see the README for the dev loop.

pub mod content;
pub mod icons;
pub mod sections;

use leptos::prelude::*;
use sections::*;

/// The whole page: header, hero, services, features, testimonials, footer.
///
/// The fixed order above is the entirety of this component's logic.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Header />
        <main>
            <Hero />
            <Services />
            <Features />
            <Testimonials />
        </main>
        <Footer />
    }
}
