//! Smooth scrolling for in-page `#anchor` links.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::listener::EventListener;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Element id an in-page link points at. A bare `#` names nothing.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Replace the jump of every `#anchor` link with a smooth scroll.
///
/// # Errors
///
/// Returns `Err` if the links cannot be queried or a listener cannot be
/// registered.
pub fn install(document: &Document) -> Result<Vec<EventListener>, JsValue> {
    let anchors = document.query_selector_all(ANCHOR_SELECTOR)?;
    let mut listeners = Vec::new();
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_ref::<Element>().cloned()) else {
            continue;
        };
        let document = document.clone();
        let link = anchor.clone();
        listeners.push(EventListener::new(&anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            if let Some(target) = anchor_target(&href).and_then(|id| document.get_element_by_id(id)) {
                scroll_to(&target);
            }
        })?);
    }
    Ok(listeners)
}
