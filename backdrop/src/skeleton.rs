//! Loading skeletons for `.loading-placeholder` elements.

#[cfg(test)]
#[path = "skeleton_test.rs"]
mod skeleton_test;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::styles;

pub const SKELETON_SELECTOR: &str = ".loading-placeholder";
pub const SKELETON_CLASS: &str = "skeleton";

/// Inline properties that give an empty placeholder a visible shape.
pub const SKELETON_STYLE: [(&str, &str); 2] = [("min-height", "20px"), ("border-radius", "8px")];

/// Turn every placeholder into a skeleton. Returns how many were converted.
///
/// # Errors
///
/// Returns `Err` if the selector cannot be queried or a write fails.
pub fn install(document: &Document) -> Result<usize, JsValue> {
    let placeholders = styles::matching(document, SKELETON_SELECTOR)?;
    for el in &placeholders {
        el.class_list().add_1(SKELETON_CLASS)?;
        let style = el.style();
        for (property, value) in SKELETON_STYLE {
            style.set_property(property, value)?;
        }
    }
    Ok(placeholders.len())
}
