//! Browser tests: `wasm-pack test --headless --firefox backdrop`.
#![cfg(target_arch = "wasm32")]

use backdrop::background::ParticleBackground;
use backdrop::config::{OrbConfig, ParticleConfig};
use backdrop::orbs::GradientOrbBackground;
use backdrop::styles;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn container(id: &str, width: u32, height: u32) -> HtmlElement {
    let doc = document();
    let el: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    el.set_id(id);
    el.style().set_css_text(&format!("width: {width}px; height: {height}px;"));
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn missing_container_is_inert_and_silent() {
    let body = document().body().unwrap();
    let before = body.inner_html();
    let bg = ParticleBackground::new("no-such-container", wasm_bindgen::JsValue::UNDEFINED);
    assert!(!bg.is_active());
    assert_eq!(bg.particle_count(), 0);
    assert!(bg.canvas().is_none());
    assert_eq!(body.inner_html(), before);
}

#[wasm_bindgen_test]
fn five_particles_inside_rendered_bounds() {
    let host = container("bg-five", 300, 200);
    let options = js_sys::JSON::parse(r#"{"particleCount": 5, "seed": 11}"#).unwrap();
    let bg = ParticleBackground::new("bg-five", options);

    assert!(bg.is_active());
    assert_eq!(bg.particle_count(), 5);
    let canvas = bg.canvas().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (300, 200));
    let inside = bg
        .with_field(|f| f.particles().iter().all(|p| f.bounds().contains(p.position())))
        .unwrap();
    assert!(inside);
    assert_eq!(host.last_element_child().unwrap().tag_name(), "CANVAS");
    host.remove();
}

#[wasm_bindgen_test]
fn destroy_stops_and_detaches() {
    let host = container("bg-destroy", 120, 80);
    let mut bg = ParticleBackground::with_config("bg-destroy", ParticleConfig { seed: Some(3), ..ParticleConfig::default() });
    assert_eq!(host.child_element_count(), 1);

    bg.destroy();
    assert!(!bg.is_active());
    assert_eq!(host.child_element_count(), 0);
    bg.destroy();
    host.remove();
}

#[wasm_bindgen_test]
fn orbs_mount_and_inject_keyframes_once() {
    let host = container("orbs-test", 400, 400);
    let mut orbs = GradientOrbBackground::with_config("orbs-test", &OrbConfig { seed: Some(9), ..OrbConfig::default() });
    assert_eq!(orbs.orb_count(), 3);
    assert_eq!(host.child_element_count(), 3);

    let doc = document();
    let injected = doc.head().unwrap().query_selector_all("style[id^=\"float-orb-\"]").unwrap().length();
    assert!(injected >= 3);
    assert!(styles::ensure(&doc, "web-test-style", "").unwrap());
    assert!(!styles::ensure(&doc, "web-test-style", "").unwrap());

    orbs.destroy();
    assert_eq!(host.child_element_count(), 0);
    host.remove();
}

#[wasm_bindgen_test]
fn interactive_card_lifts_on_enter_and_rests_on_leave() {
    let doc = document();
    let card: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    card.set_class_name("card-interactive");
    doc.body().unwrap().append_child(&card).unwrap();

    let listeners = backdrop::hover::install(&doc).unwrap();
    assert_eq!(listeners.len(), 2);

    card.dispatch_event(&web_sys::Event::new("mouseenter").unwrap()).unwrap();
    assert_eq!(card.style().get_property_value("transform").unwrap(), "translateY(-8px) scale(1.02)");
    card.dispatch_event(&web_sys::Event::new("mouseleave").unwrap()).unwrap();
    assert_eq!(card.style().get_property_value("box-shadow").unwrap(), "");

    drop(listeners);
    card.remove();
}
