//! One-time `<style>` injection.
//!
//! Effects that rely on keyframes register their stylesheet under a fixed
//! element id. The first request appends a `<style>` element to `<head>`;
//! later requests for the same id are no-ops for the rest of the page's life.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

use std::cell::RefCell;
use std::collections::HashSet;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::color::Rgba;

/// Element id of the ripple stylesheet.
pub const RIPPLE_STYLE_ID: &str = "backdrop-ripple";

/// Ripple span styling and its expanding keyframes.
pub const RIPPLE_CSS: &str = "\
.btn { position: relative; overflow: hidden; }
.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.3);
  transform: scale(0);
  animation: ripple-animation 0.6s linear;
  pointer-events: none;
}
@keyframes ripple-animation {
  to { transform: scale(4); opacity: 0; }
}
";

/// Ids of stylesheets already injected.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    injected: HashSet<String>,
}

impl StyleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.injected.contains(id)
    }

    /// Record `id`. Returns `true` the first time only.
    pub fn insert(&mut self, id: &str) -> bool {
        self.injected.insert(id.to_owned())
    }
}

thread_local! {
    static REGISTRY: RefCell<StyleRegistry> = RefCell::new(StyleRegistry::new());
}

/// Append `css` to `<head>` under `id` unless it is already present.
///
/// Returns `true` if a new element was appended.
///
/// # Errors
///
/// Returns `Err` if the document has no `<head>` or the append fails; the id
/// stays unclaimed so a later call can retry.
pub fn ensure(document: &Document, id: &str, css: &str) -> Result<bool, JsValue> {
    if REGISTRY.with_borrow(|r| r.contains(id)) {
        return Ok(false);
    }
    if document.get_element_by_id(id).is_some() {
        REGISTRY.with_borrow_mut(|r| r.insert(id));
        return Ok(false);
    }
    let head = document.head().ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(REGISTRY.with_borrow_mut(|r| r.insert(id)))
}

/// One waypoint of an orb's drift loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Keyframe position in percent.
    pub at: u8,
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
}

/// A looping `@keyframes` rule that starts and ends at rest.
#[must_use]
pub fn drift_keyframes(name: &str, waypoints: &[Waypoint]) -> String {
    let stops: String = waypoints
        .iter()
        .map(|w| {
            format!(
                "  {}% {{ transform: translate({:.1}px, {:.1}px) scale({}); }}\n",
                w.at, w.dx, w.dy, w.scale
            )
        })
        .collect();
    format!("@keyframes {name} {{\n  0%, 100% {{ transform: translate(0, 0) scale(1); }}\n{stops}}}\n")
}

/// Inline style for a blurred radial-gradient orb.
#[must_use]
pub fn orb_style(diameter_px: f64, color: Rgba, blur_px: f64, animation: &str) -> String {
    format!(
        "position: absolute; width: {diameter_px:.0}px; height: {diameter_px:.0}px; \
         background: radial-gradient(circle, {color} 0%, transparent 70%); \
         border-radius: 50%; filter: blur({blur_px}px); pointer-events: none; z-index: 1; \
         animation: {animation};"
    )
}

/// Inline style for the particle overlay canvas.
pub const OVERLAY_CANVAS_CSS: &str =
    "position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 1;";

/// Every styleable element matching `selector`, in document order.
///
/// # Errors
///
/// Returns `Err` if the selector is invalid.
pub fn matching(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_ref::<HtmlElement>().cloned())
        .collect())
}
