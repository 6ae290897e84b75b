#![cfg(target_arch = "wasm32")]

//! DOM-level checks for the rendered page, run in a browser via
//! `wasm-pack test --headless --chrome` (or `--firefox`).
//!
//! Each test mounts into its own container so assertions never see another
//! test's markup.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use swifthaul_landing::content::{
    FEATURES, FOOTER_COLUMNS, NAV_LINKS, SERVICES, SOCIAL_LINKS, TESTIMONIALS,
};
use swifthaul_landing::sections::{Features, Footer, Header, Hero, Services, Testimonials};
use swifthaul_landing::App;

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host.unchecked_into()
}

#[wasm_bindgen_test]
fn header_renders_one_link_per_nav_entry() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || view! { <Header /> });

    let links = host.query_selector_all(".nav-link").unwrap();
    assert_eq!(links.length() as usize, NAV_LINKS.len());
}

#[wasm_bindgen_test]
fn services_renders_one_card_per_entry_in_order() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || view! { <Services /> });

    let cards = host.query_selector_all(".service-card").unwrap();
    assert_eq!(cards.length() as usize, SERVICES.len());

    let titles = host.query_selector_all(".service-title").unwrap();
    for (i, service) in SERVICES.iter().enumerate() {
        let node = titles.item(i as u32).unwrap();
        assert_eq!(node.text_content().unwrap(), service.title);
    }
}

#[wasm_bindgen_test]
fn features_renders_one_card_per_entry() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || view! { <Features /> });

    let cards = host.query_selector_all(".feature-card").unwrap();
    assert_eq!(cards.length() as usize, FEATURES.len());
}

#[wasm_bindgen_test]
fn testimonials_renders_one_card_per_entry() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || view! { <Testimonials /> });

    let cards = host.query_selector_all(".testimonial-card").unwrap();
    assert_eq!(cards.length() as usize, TESTIMONIALS.len());
}

#[wasm_bindgen_test]
fn footer_renders_every_column_and_social_link() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || view! { <Footer /> });

    let columns = host.query_selector_all(".footer-column").unwrap();
    assert_eq!(columns.length() as usize, FOOTER_COLUMNS.len());

    let links = host.query_selector_all(".footer-link").unwrap();
    let expected: usize = FOOTER_COLUMNS.iter().map(|c| c.links.len()).sum();
    assert_eq!(links.length() as usize, expected);

    let social = host.query_selector_all(".social-link").unwrap();
    assert_eq!(social.length() as usize, SOCIAL_LINKS.len());
}

#[wasm_bindgen_test]
fn page_renders_sections_in_fixed_order() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || view! { <App /> });

    let html = host.inner_html();
    let markers = [
        "<header",
        "id=\"hero\"",
        "id=\"services\"",
        "id=\"features\"",
        "id=\"testimonials\"",
        "<footer",
    ];
    let positions: Vec<usize> = markers
        .iter()
        .map(|marker| {
            html.find(*marker)
                .unwrap_or_else(|| panic!("marker {marker} not rendered"))
        })
        .collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "sections out of order: {positions:?}"
    );
}

#[wasm_bindgen_test]
fn rendering_is_idempotent() {
    let first = host();
    let second = host();
    let _a = leptos::mount::mount_to(first.clone(), || view! { <App /> });
    let _b = leptos::mount::mount_to(second.clone(), || view! { <App /> });

    assert_eq!(first.inner_html(), second.inner_html());
}

#[wasm_bindgen_test]
fn estimate_button_click_leaves_the_dom_unchanged() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || view! { <Hero /> });

    let before = host.inner_html();
    let button: web_sys::HtmlElement = host
        .query_selector(".estimate-submit")
        .unwrap()
        .expect("estimate button rendered")
        .unchecked_into();
    button.click();

    assert_eq!(host.inner_html(), before);
}
