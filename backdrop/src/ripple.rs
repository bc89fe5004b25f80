//! Click ripples on `.btn` elements.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::consts::RIPPLE_LIFETIME_MS;
use crate::geom::Point;
use crate::listener::EventListener;
use crate::styles::{self, RIPPLE_CSS, RIPPLE_STYLE_ID};

pub const BUTTON_SELECTOR: &str = ".btn";
pub const RIPPLE_CLASS: &str = "ripple";

/// Square ripple box in the button's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleBox {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// A square as large as the button's longer side, centred on the click.
///
/// `origin` is the button's top-left corner and `click` the pointer, both in
/// viewport coordinates.
#[must_use]
pub fn ripple_box(origin: Point, width: f64, height: f64, click: Point) -> RippleBox {
    let size = width.max(height);
    RippleBox {
        size,
        left: click.x - origin.x - size / 2.0,
        top: click.y - origin.y - size / 2.0,
    }
}

/// Inject the ripple stylesheet and attach a click handler to every `.btn`.
///
/// # Errors
///
/// Returns `Err` if the stylesheet cannot be injected or a listener cannot
/// be registered.
pub fn install(document: &Document) -> Result<Vec<EventListener>, JsValue> {
    styles::ensure(document, RIPPLE_STYLE_ID, RIPPLE_CSS)?;
    let buttons = document.query_selector_all(BUTTON_SELECTOR)?;
    let mut listeners = Vec::new();
    for i in 0..buttons.length() {
        let Some(button) = buttons.item(i).and_then(|n| n.dyn_ref::<Element>().cloned()) else {
            continue;
        };
        let document = document.clone();
        let target = button.clone();
        listeners.push(EventListener::new(&button, "click", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                if let Err(err) = spawn(&document, &target, mouse) {
                    log::debug!("ripple not shown: {err:?}");
                }
            }
        })?);
    }
    Ok(listeners)
}

fn spawn(document: &Document, button: &Element, click: &MouseEvent) -> Result<(), JsValue> {
    let rect = button.get_bounding_client_rect();
    let geometry = ripple_box(
        Point::new(rect.left(), rect.top()),
        rect.width(),
        rect.height(),
        Point::new(f64::from(click.client_x()), f64::from(click.client_y())),
    );

    let ripple: HtmlElement = document.create_element("span")?.dyn_into()?;
    let style = ripple.style();
    style.set_property("width", &format!("{}px", geometry.size))?;
    style.set_property("height", &format!("{}px", geometry.size))?;
    style.set_property("left", &format!("{}px", geometry.left))?;
    style.set_property("top", &format!("{}px", geometry.top))?;
    ripple.class_list().add_1(RIPPLE_CLASS)?;
    button.append_child(&ripple)?;

    Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
    Ok(())
}
