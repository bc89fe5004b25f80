//! Scroll-triggered fade-in.
//!
//! Cards and findings get [`REVEAL_CLASS`] the first time they scroll into
//! view and are then dropped from the observer, so each animates once.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_SELECTOR: &str = ".card, .feature-card, .metric-card, .finding-item";
pub const REVEAL_CLASS: &str = "animate-fadeInUp";

/// Fraction of the element that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport's bottom edge so elements reveal slightly late.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer. Dropping it disconnects.
pub struct Reveal {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Reveal {
    /// Observe every element matching [`REVEAL_SELECTOR`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the observer cannot be created or the selector
    /// cannot be queried.
    pub fn install(document: &Document) -> Result<Self, JsValue> {
        let callback: ObserverCallback = Closure::wrap(Box::new(|entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    reveal(&entry.target(), &observer);
                }
            }
        })
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let targets = document.query_selector_all(REVEAL_SELECTOR)?;
        for i in 0..targets.length() {
            if let Some(el) = targets.item(i).and_then(|n| n.dyn_ref::<Element>().cloned()) {
                observer.observe(&el);
            }
        }
        Ok(Self { observer, _callback: callback })
    }
}

fn reveal(target: &Element, observer: &IntersectionObserver) {
    if let Err(err) = target.class_list().add_1(REVEAL_CLASS) {
        log::debug!("reveal class not added: {err:?}");
    }
    observer.unobserve(target);
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl std::fmt::Debug for Reveal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reveal").finish_non_exhaustive()
    }
}
