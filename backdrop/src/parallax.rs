//! Pointer parallax for floating hero decorations.
//!
//! Each `.hero-floating-element` is translated against the pointer's
//! position in the viewport; later elements move further, which gives the
//! stack its depth.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::consts::{PARALLAX_RANGE_PX, PARALLAX_SPEED_STEP};
use crate::geom::{Point, Size};
use crate::listener::EventListener;
use crate::styles;

pub const PARALLAX_SELECTOR: &str = ".hero-floating-element";

/// Pointer position as a fraction of the viewport, or `None` for an empty
/// viewport.
#[must_use]
pub fn pointer_fraction(client: Point, viewport: Size) -> Option<Point> {
    if viewport.width > 0.0 && viewport.height > 0.0 {
        Some(Point::new(client.x / viewport.width, client.y / viewport.height))
    } else {
        None
    }
}

/// Offset of the element at `index` with the pointer at `fraction`.
/// Zero with the pointer at the viewport centre.
#[must_use]
pub fn parallax_offset(index: u32, fraction: Point) -> Point {
    let speed = f64::from(index + 1) * PARALLAX_SPEED_STEP;
    Point::new(
        (fraction.x - 0.5) * speed * PARALLAX_RANGE_PX,
        (fraction.y - 0.5) * speed * PARALLAX_RANGE_PX,
    )
}

/// CSS `transform` value for `offset`.
#[must_use]
pub fn translate(offset: Point) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

fn viewport(window: &Window) -> Option<Size> {
    let width = window.inner_width().unwrap_or(JsValue::NULL).as_f64()?;
    let height = window.inner_height().unwrap_or(JsValue::NULL).as_f64()?;
    Some(Size::new(width, height))
}

/// Move the page's floating decorations with the pointer. Returns `None`
/// when the page has none.
///
/// # Errors
///
/// Returns `Err` if there is no window or the listener cannot be registered.
pub fn install(document: &Document) -> Result<Option<EventListener>, JsValue> {
    let elements: Vec<HtmlElement> = styles::matching(document, PARALLAX_SELECTOR)?;
    if elements.is_empty() {
        return Ok(None);
    }
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let listener = EventListener::new(document, "mousemove", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let client = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        let Some(fraction) = viewport(&window).and_then(|v| pointer_fraction(client, v)) else {
            return;
        };
        for (index, el) in (0u32..).zip(&elements) {
            let transform = translate(parallax_offset(index, fraction));
            if let Err(err) = el.style().set_property("transform", &transform) {
                log::debug!("parallax transform not set: {err:?}");
            }
        }
    })?;
    Ok(Some(listener))
}
