//! Browser integration tests for the DOM wiring.

#![cfg(target_arch = "wasm32")]

use glowkit_core::{ParticleConfig, BUTTON_SELECTOR, PARTICLE_CLASS, PARTICLE_CONTAINER_ID};
use glowkit_web::{glow, particles, scroll};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    gloo::utils::document()
}

/// Drop any container left behind by another test.
fn clear_particles(doc: &Document) {
    if let Some(existing) = doc.get_element_by_id(PARTICLE_CONTAINER_ID) {
        existing.remove();
    }
}

fn cancelable_click() -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn mount_creates_configured_particle_count() {
    let doc = document();
    clear_particles(&doc);

    let container = particles::mount(&doc).unwrap();

    assert_eq!(container.id(), PARTICLE_CONTAINER_ID);
    assert_eq!(container.child_element_count(), 60);

    container.remove();
}

#[wasm_bindgen_test]
fn mounted_particles_carry_class_and_styles() {
    let doc = document();
    clear_particles(&doc);

    let config = ParticleConfig {
        count: 5,
        ..Default::default()
    };
    let mut rng = SmallRng::seed_from_u64(42);
    let container = particles::mount_with(&doc, &config, &mut rng).unwrap();

    let children = container.children();
    assert_eq!(children.length(), 5);

    for i in 0..children.length() {
        let child: HtmlElement = children.item(i).unwrap().dyn_into().unwrap();
        assert_eq!(child.class_name(), PARTICLE_CLASS);

        let style = child.style();
        for prop in ["left", "bottom", "animation-duration", "animation-delay"] {
            let value = style.get_property_value(prop).unwrap();
            assert!(!value.is_empty(), "missing style property {prop}");
        }
    }

    container.remove();
}

#[wasm_bindgen_test]
fn mounting_twice_reuses_the_container() {
    let doc = document();
    clear_particles(&doc);

    let first = particles::mount(&doc).unwrap();
    let second = particles::mount(&doc).unwrap();

    assert_eq!(first, second);
    let containers = doc
        .query_selector_all(&format!("#{PARTICLE_CONTAINER_ID}"))
        .unwrap();
    assert_eq!(containers.length(), 1);

    first.remove();
}

#[wasm_bindgen_test]
fn anchor_click_to_existing_target_prevents_default() {
    let doc = document();
    let body = doc.body().unwrap();

    let target = doc.create_element("div").unwrap();
    target.set_id("scroll-dest");
    body.append_child(&target).unwrap();

    let anchor = doc.create_element("a").unwrap();
    anchor.set_attribute("href", "#scroll-dest").unwrap();
    body.append_child(&anchor).unwrap();

    let wired = scroll::install(&doc).unwrap();
    assert!(wired >= 1);

    let event = cancelable_click();
    let not_canceled = anchor.dispatch_event(&event).unwrap();
    assert!(!not_canceled, "default navigation was not suppressed");

    anchor.remove();
    target.remove();
}

#[wasm_bindgen_test]
fn anchor_click_to_missing_target_is_a_silent_no_op() {
    let doc = document();
    let body = doc.body().unwrap();

    let anchor = doc.create_element("a").unwrap();
    anchor.set_attribute("href", "#nowhere").unwrap();
    body.append_child(&anchor).unwrap();

    scroll::install(&doc).unwrap();

    // Must not throw and must still suppress the jump.
    let event = cancelable_click();
    let not_canceled = anchor.dispatch_event(&event).unwrap();
    assert!(!not_canceled);

    anchor.remove();
}

#[wasm_bindgen_test]
fn bare_hash_anchor_click_is_a_silent_no_op() {
    let doc = document();
    let body = doc.body().unwrap();

    let anchor = doc.create_element("a").unwrap();
    anchor.set_attribute("href", "#").unwrap();
    body.append_child(&anchor).unwrap();

    scroll::install(&doc).unwrap();

    let event = cancelable_click();
    let not_canceled = anchor.dispatch_event(&event).unwrap();
    assert!(!not_canceled);

    anchor.remove();
}

#[wasm_bindgen_test]
fn mousemove_over_button_publishes_exact_offset() {
    let doc = document();
    let body = doc.body().unwrap();

    let button: HtmlElement = doc.create_element("button").unwrap().dyn_into().unwrap();
    button.set_class_name("btn");
    body.append_child(&button).unwrap();

    let wired = glow::install(&doc).unwrap();
    assert!(wired >= 1);

    let init = MouseEventInit::new();
    init.set_client_x(40);
    init.set_client_y(25);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    button.dispatch_event(&event).unwrap();

    let rect = button.get_bounding_client_rect();
    let style = button.style();
    assert_eq!(
        style.get_property_value("--x").unwrap(),
        format!("{}px", 40.0 - rect.left())
    );
    assert_eq!(
        style.get_property_value("--y").unwrap(),
        format!("{}px", 25.0 - rect.top())
    );

    button.remove();
}

#[wasm_bindgen_test]
fn glow_install_skips_pages_without_buttons() {
    let doc = document();

    // No `.btn` elements are present between tests.
    assert!(doc.query_selector(BUTTON_SELECTOR).unwrap().is_none());
    assert_eq!(glow::install(&doc).unwrap(), 0);
}

#[wasm_bindgen_test]
fn enhance_runs_all_behaviors_on_an_empty_page() {
    let doc = document();
    clear_particles(&doc);

    glowkit_web::enhance(&doc);

    let container = doc.get_element_by_id(PARTICLE_CONTAINER_ID).unwrap();
    assert_eq!(container.child_element_count(), 60);

    container.remove();
}
