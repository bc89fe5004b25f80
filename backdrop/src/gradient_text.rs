//! Slowly shifting gradient fill for `.text-gradient-animated` headings.

#[cfg(test)]
#[path = "gradient_text_test.rs"]
mod gradient_text_test;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::styles;

pub const GRADIENT_SELECTOR: &str = ".text-gradient-animated";
pub const GRADIENT_STYLE_ID: &str = "backdrop-gradient-text";
pub const GRADIENT_KEYFRAMES: &str = "gradient-shift";
pub const GRADIENT_ANIMATION: &str = "gradient-shift 3s ease infinite";

/// Oversized so the animated position has room to travel.
pub const GRADIENT_BACKGROUND_SIZE: &str = "200% 200%";

pub const GRADIENT_CSS: &str = "\
@keyframes gradient-shift {
  0%, 100% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
}
.text-gradient-animated {
  background: linear-gradient(45deg, #7B5CFF, #B721FF, #21D4FD, #7B5CFF);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}
";

/// Inject the gradient stylesheet and start the animation on every
/// matching element. Returns how many were animated.
///
/// # Errors
///
/// Returns `Err` if the stylesheet cannot be injected or a style write fails.
pub fn install(document: &Document) -> Result<usize, JsValue> {
    styles::ensure(document, GRADIENT_STYLE_ID, GRADIENT_CSS)?;
    let targets = styles::matching(document, GRADIENT_SELECTOR)?;
    for el in &targets {
        let style = el.style();
        style.set_property("background-size", GRADIENT_BACKGROUND_SIZE)?;
        style.set_property("animation", GRADIENT_ANIMATION)?;
    }
    Ok(targets.len())
}
