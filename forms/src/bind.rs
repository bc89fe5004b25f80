//! Wires the form descriptions to the live page.
//!
//! A form that is not on the page is skipped. Listeners live as long as the
//! returned [`FormBinding`].

use std::cell::RefCell;
use std::rc::Rc;

use backdrop::listener::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

use crate::analysis::{
    self, AnalysisInput, InputMethod, LANGUAGE_GROUP_ID, LANGUAGE_ID, PROGRESS_ID, PROGRESS_STEPS, ProgressStep,
    SUBMIT_BUTTON_ID, Slot, ZipUpload,
};
use crate::error::FieldError;
use crate::form::{FieldValues, FormSpec, LOGIN, SIGNUP};

/// Listeners and pending timers for one bound form.
#[derive(Debug)]
pub struct FormBinding {
    form_id: &'static str,
    _listeners: Vec<EventListener>,
    _timers: Rc<RefCell<Vec<Timeout>>>,
}

impl FormBinding {
    #[must_use]
    pub fn form_id(&self) -> &'static str {
        self.form_id
    }
}

thread_local! {
    static BOUND: RefCell<Vec<FormBinding>> = const { RefCell::new(Vec::new()) };
}

/// `bindForms()`: bind every known form on the page, replacing earlier
/// bindings. Returns the number of forms bound.
#[wasm_bindgen(js_name = bindForms)]
pub fn bind_forms() -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let bindings = bind_all(&document);
    let count = bindings.len();
    BOUND.with(|bound| *bound.borrow_mut() = bindings);
    count
}

/// Bind the login, signup and analysis forms present in `document`.
#[must_use]
pub fn bind_all(document: &Document) -> Vec<FormBinding> {
    let mut out = Vec::new();
    for spec in [LOGIN, SIGNUP] {
        match bind_account_form(document, spec) {
            Ok(Some(binding)) => out.push(binding),
            Ok(None) => {}
            Err(err) => log::warn!("form #{} not bound: {err:?}", spec.form_id),
        }
    }
    match bind_analysis_form(document) {
        Ok(Some(binding)) => out.push(binding),
        Ok(None) => {}
        Err(err) => log::warn!("form #{} not bound: {err:?}", analysis::FORM_ID),
    }
    if !out.is_empty() {
        log::debug!("bound forms: {:?}", out.iter().map(FormBinding::form_id).collect::<Vec<_>>());
    }
    out
}

// =============================================================
// DOM access
// =============================================================

struct DomValues<'a>(&'a Document);

impl FieldValues for DomValues<'_> {
    fn value(&self, input_id: &str) -> String {
        input_value(self.0, input_id)
    }
}

fn input_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn clear_input(document: &Document, id: &str) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value("");
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value("");
    }
}

fn selected_zip(document: &Document) -> Option<ZipUpload> {
    let el = document.get_element_by_id(InputMethod::ZipFile.input_id())?;
    let file = el.dyn_ref::<HtmlInputElement>()?.files()?.get(0)?;
    Some(ZipUpload { name: file.name(), size: file.size() })
}

fn html(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_ref::<HtmlElement>().cloned()
}

fn set_display(el: &HtmlElement, value: &str) {
    if let Err(err) = el.style().set_property("display", value) {
        log::debug!("display not set: {err:?}");
    }
}

/// Show `outcome` in the slot with `error_id`.
fn show(document: &Document, error_id: &str, outcome: Result<(), FieldError>) {
    let Some(slot) = html(document, error_id) else {
        return;
    };
    match outcome {
        Err(err) => {
            slot.set_text_content(Some(&err.to_string()));
            set_display(&slot, "block");
        }
        Ok(()) => {
            slot.set_text_content(Some(""));
            set_display(&slot, "none");
        }
    }
}

// =============================================================
// Login and signup
// =============================================================

/// Bind `spec` if its form is on the page.
///
/// # Errors
///
/// Returns `Err` if a listener cannot be registered.
pub fn bind_account_form(document: &Document, spec: FormSpec) -> Result<Option<FormBinding>, JsValue> {
    let Some(form) = document.get_element_by_id(spec.form_id) else {
        return Ok(None);
    };
    let mut listeners = Vec::new();

    for &field in spec.fields {
        let Some(input) = document.get_element_by_id(field.input_id()) else {
            continue;
        };
        let doc = document.clone();
        listeners.push(EventListener::new(&input, "blur", move |_| {
            show(&doc, field.error_id(), field.validate(&DomValues(&doc)));
        })?);
    }

    if let Some((source, dependent)) = spec.linked {
        if let Some(input) = document.get_element_by_id(source.input_id()) {
            let doc = document.clone();
            listeners.push(EventListener::new(&input, "input", move |_| {
                if !input_value(&doc, dependent.input_id()).is_empty() {
                    show(&doc, dependent.error_id(), dependent.validate(&DomValues(&doc)));
                }
            })?);
        }
    }

    let doc = document.clone();
    listeners.push(EventListener::new(&form, "submit", move |event: Event| {
        let mut valid = true;
        for (field, outcome) in spec.validate_all(&DomValues(&doc)) {
            valid &= outcome.is_ok();
            show(&doc, field.error_id(), outcome);
        }
        if !valid {
            event.prevent_default();
        }
    })?);

    Ok(Some(FormBinding { form_id: spec.form_id, _listeners: listeners, _timers: Rc::default() }))
}

// =============================================================
// Code analysis
// =============================================================

fn read_analysis(document: &Document) -> AnalysisInput {
    AnalysisInput {
        github_url: input_value(document, InputMethod::GithubUrl.input_id()),
        zip: selected_zip(document),
        code: input_value(document, InputMethod::Code.input_id()),
        language: input_value(document, LANGUAGE_ID),
    }
}

/// Validate the analysis form and update its slots. Returns `true` if valid.
fn check_analysis(document: &Document) -> bool {
    for slot in Slot::ALL {
        show(document, slot.error_id(), Ok(()));
    }
    match read_analysis(document).validate() {
        Ok(()) => true,
        Err((slot, err)) => {
            show(document, slot.error_id(), Err(err));
            false
        }
    }
}

fn has_value(document: &Document, method: InputMethod) -> bool {
    match method {
        InputMethod::ZipFile => selected_zip(document).is_some(),
        InputMethod::GithubUrl | InputMethod::Code => !input_value(document, method.input_id()).trim().is_empty(),
    }
}

fn apply_exclusive(document: &Document, method: InputMethod) {
    let Some(edit) = analysis::exclusive_edit(method, has_value(document, method)) else {
        return;
    };
    for other in edit.clear {
        clear_input(document, other.input_id());
    }
    if let Some(group) = html(document, LANGUAGE_GROUP_ID) {
        set_display(&group, if edit.show_language { "block" } else { "none" });
    }
}

fn submit_button(document: &Document) -> Option<HtmlButtonElement> {
    document.get_element_by_id(SUBMIT_BUTTON_ID)?.dyn_ref::<HtmlButtonElement>().cloned()
}

fn button_part(button: &HtmlButtonElement, selector: &str) -> Option<HtmlElement> {
    let el: Element = button.query_selector(selector).unwrap_or(None)?;
    el.dyn_ref::<HtmlElement>().cloned()
}

fn set_loading(document: &Document, loading: bool) {
    let Some(button) = submit_button(document) else {
        return;
    };
    if let Some(text) = button_part(&button, ".btn-text") {
        set_display(&text, if loading { "none" } else { "inline" });
    }
    if let Some(spinner) = button_part(&button, ".btn-loading") {
        set_display(&spinner, if loading { "inline" } else { "none" });
    }
    button.set_disabled(loading);
}

fn mark_step(document: &Document, step: ProgressStep) {
    let Some(row) = document.get_element_by_id(step.id) else {
        return;
    };
    if let Some(icon) = row.query_selector(".step-icon").unwrap_or(None) {
        icon.set_text_content(Some(step.icon));
    }
    if let Some(text) = row.query_selector(".step-text").unwrap_or(None) {
        text.set_text_content(Some(step.text));
    }
    if let Err(err) = row.class_list().add_1("completed") {
        log::debug!("step {} not marked: {err:?}", step.id);
    }
}

/// Show the busy button and progress panel, scheduling the step updates
/// and the give-up timeout into `timers`.
fn start_progress(document: &Document, timers: &RefCell<Vec<Timeout>>) {
    set_loading(document, true);
    if let Some(panel) = html(document, PROGRESS_ID) {
        set_display(&panel, "block");
    }

    let mut timers = timers.borrow_mut();
    timers.clear();
    for step in PROGRESS_STEPS {
        let doc = document.clone();
        timers.push(Timeout::new(step.delay_ms, move || mark_step(&doc, step)));
    }
    let doc = document.clone();
    timers.push(Timeout::new(analysis::LOADING_TIMEOUT_MS, move || set_loading(&doc, false)));
}

/// Bind the analysis form if it is on the page.
///
/// # Errors
///
/// Returns `Err` if a listener cannot be registered.
pub fn bind_analysis_form(document: &Document) -> Result<Option<FormBinding>, JsValue> {
    let Some(form) = document.get_element_by_id(analysis::FORM_ID) else {
        return Ok(None);
    };
    let timers: Rc<RefCell<Vec<Timeout>>> = Rc::default();
    let mut listeners = Vec::new();

    for method in InputMethod::ALL {
        let Some(input) = document.get_element_by_id(method.input_id()) else {
            continue;
        };
        let event = if method == InputMethod::ZipFile { "change" } else { "input" };
        let doc = document.clone();
        listeners.push(EventListener::new(&input, event, move |_| {
            apply_exclusive(&doc, method);
            if method == InputMethod::ZipFile && has_value(&doc, method) {
                check_analysis(&doc);
            }
        })?);

        if method == InputMethod::GithubUrl {
            let doc = document.clone();
            listeners.push(EventListener::new(&input, "blur", move |_| {
                if has_value(&doc, InputMethod::GithubUrl) {
                    check_analysis(&doc);
                }
            })?);
        }
    }

    let doc = document.clone();
    let pending = Rc::clone(&timers);
    listeners.push(EventListener::new(&form, "submit", move |event: Event| {
        if check_analysis(&doc) {
            start_progress(&doc, &pending);
        } else {
            event.prevent_default();
        }
    })?);

    Ok(Some(FormBinding { form_id: analysis::FORM_ID, _listeners: listeners, _timers: timers }))
}
