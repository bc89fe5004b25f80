//! Lift-on-hover for interactive cards.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::listener::EventListener;
use crate::styles;

pub const HOVER_SELECTOR: &str = ".card-interactive";

/// Inline transform and shadow for a card. An empty shadow clears the
/// property so the stylesheet's own shadow shows again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPose {
    pub transform: &'static str,
    pub shadow: &'static str,
}

pub const LIFTED: CardPose = CardPose {
    transform: "translateY(-8px) scale(1.02)",
    shadow: "0 20px 40px rgba(0, 0, 0, 0.3)",
};

pub const RESTING: CardPose = CardPose { transform: "translateY(0) scale(1)", shadow: "" };

#[must_use]
pub fn pose(hovered: bool) -> CardPose {
    if hovered { LIFTED } else { RESTING }
}

fn apply(card: &HtmlElement, pose: CardPose) -> Result<(), JsValue> {
    let style = card.style();
    style.set_property("transform", pose.transform)?;
    if pose.shadow.is_empty() {
        style.remove_property("box-shadow")?;
    } else {
        style.set_property("box-shadow", pose.shadow)?;
    }
    Ok(())
}

fn on(card: &HtmlElement, event: &'static str, hovered: bool) -> Result<EventListener, JsValue> {
    let target = card.clone();
    EventListener::new(card, event, move |_| {
        if let Err(err) = apply(&target, pose(hovered)) {
            log::debug!("card pose not applied: {err:?}");
        }
    })
}

/// Wire enter/leave handlers on every interactive card.
///
/// # Errors
///
/// Returns `Err` if a listener cannot be registered.
pub fn install(document: &Document) -> Result<Vec<EventListener>, JsValue> {
    let mut listeners = Vec::new();
    for card in styles::matching(document, HOVER_SELECTOR)? {
        listeners.push(on(&card, "mouseenter", true)?);
        listeners.push(on(&card, "mouseleave", false)?);
    }
    Ok(listeners)
}
