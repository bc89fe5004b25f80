//! WebAssembly entry point for the site's pages.
//!
//! Loading the module installs the panic hook and the console logger, then
//! mounts the page effects and binds the forms once the document is parsed.
//! Everything mounted stays alive for the life of the page.

use std::cell::RefCell;

use backdrop::listener::EventListener;
use backdrop::page::{self, PageEffects};
use wasm_bindgen::prelude::*;
use web_sys::Document;

thread_local! {
    static PAGE: RefCell<Option<PageEffects>> = const { RefCell::new(None) };
    static ON_READY: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {err}");
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let listener = EventListener::new(&document, "DOMContentLoaded", |_| mount_page())?;
        ON_READY.with(|slot| *slot.borrow_mut() = Some(listener));
    } else {
        mount(&document);
    }
    Ok(())
}

fn mount_page() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        mount(&document);
    }
}

fn mount(document: &Document) {
    if PAGE.with(|p| p.borrow().is_some()) {
        return;
    }
    let effects = page::mount(document);
    let forms = forms::bind::bind_forms();
    log::info!("site ready: {forms} form(s) bound");
    PAGE.with(|p| *p.borrow_mut() = Some(effects));
}
