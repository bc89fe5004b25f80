//! Light/dark theme preference and toggle.
//!
//! The active theme lives in the `data-theme` attribute of `<html>` and is
//! persisted under a single `localStorage` key. Dark is the default when
//! nothing (or something unrecognized) is stored. Storage is best-effort:
//! when it is unavailable the toggle still works for the current page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage};

use crate::consts::THEME_TRANSITION_MS;
use crate::listener::EventListener;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Selector for toggle buttons.
pub const TOGGLE_SELECTOR: &str = ".theme-toggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored value; anything but `"light"` means dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Glyph shown on the toggle button.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀️",
        }
    }
}

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().unwrap_or(None)
}

/// Read the stored preference, defaulting to dark.
#[must_use]
pub fn read_preference() -> Theme {
    let stored = storage().and_then(|s| s.get_item(STORAGE_KEY).unwrap_or(None));
    Theme::from_stored(stored.as_deref())
}

/// The theme currently applied to `<html>`.
#[must_use]
pub fn current(document: &Document) -> Theme {
    let attr = document.document_element().and_then(|el| el.get_attribute(THEME_ATTRIBUTE));
    Theme::from_stored(attr.as_deref())
}

/// Apply `theme` to `<html>` and refresh every toggle button's icon.
pub fn apply(document: &Document, theme: Theme) {
    if let Some(el) = document.document_element() {
        if let Err(err) = el.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            log::warn!("theme attribute not set: {err:?}");
        }
    }
    if let Ok(buttons) = document.query_selector_all(TOGGLE_SELECTOR) {
        for i in 0..buttons.length() {
            if let Some(button) = buttons.item(i) {
                button.set_text_content(Some(theme.icon()));
            }
        }
    }
}

fn persist(theme: Theme) {
    let Some(storage) = storage() else {
        return;
    };
    if let Err(err) = storage.set_item(STORAGE_KEY, theme.as_str()) {
        log::debug!("theme preference not persisted: {err:?}");
    }
}

/// Flip the applied theme, persist it and fade the body background.
pub fn toggle(document: &Document) -> Theme {
    let next = current(document).toggled();
    apply(document, next);
    persist(next);
    fade_body(document);
    next
}

fn fade_body(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    if let Err(err) = body.style().set_property("transition", "background-color 0.3s ease") {
        log::debug!("theme transition not set: {err:?}");
        return;
    }
    Timeout::new(THEME_TRANSITION_MS, move || {
        if let Err(err) = body.style().remove_property("transition") {
            log::debug!("theme transition not cleared: {err:?}");
        }
    })
    .forget();
}

/// Apply the stored theme and wire every `.theme-toggle` button.
///
/// # Errors
///
/// Returns `Err` if the toggle selector cannot be queried or a listener
/// cannot be registered.
pub fn install(document: &Document) -> Result<Vec<EventListener>, JsValue> {
    apply(document, read_preference());
    let buttons = document.query_selector_all(TOGGLE_SELECTOR)?;
    let mut listeners = Vec::with_capacity(buttons.length() as usize);
    for i in 0..buttons.length() {
        if let Some(button) = buttons.item(i) {
            let document = document.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                toggle(&document);
            })?);
        }
    }
    Ok(listeners)
}

/// `toggleTheme()`: flip the theme from script. Returns the new theme name.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> String {
    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => toggle(&document).as_str().to_owned(),
        None => read_preference().as_str().to_owned(),
    }
}
