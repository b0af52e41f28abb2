//! Thin wrappers over `web-sys` lookups, style mutation, and listener
//! registration.
//!
//! Listener closures are leaked on registration (`Closure::forget`);
//! every handler in this crate lives as long as the document, so there
//! is nothing to unregister.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, HtmlElement,
    Window,
};

use crate::error::UnveilError;

/// The global window, or an error in windowless environments.
pub fn window() -> Result<Window, UnveilError> {
    web_sys::window().ok_or(UnveilError::MissingWindow)
}

/// The window's document.
pub fn document(window: &Window) -> Result<Document, UnveilError> {
    window.document().ok_or(UnveilError::MissingDocument)
}

/// All elements matching `selector`, in document order. Nodes that are
/// not HTML elements are skipped.
pub fn query_all(
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlElement>, UnveilError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i) {
            if let Ok(el) = node.dyn_into::<HtmlElement>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}

/// First element matching `selector`, if any.
pub fn query_first(
    document: &Document,
    selector: &str,
) -> Result<Option<HtmlElement>, UnveilError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Register a page-lifetime event listener.
pub fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), UnveilError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(
        kind,
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}

/// Same as [`listen`], but registered as passive so the handler can
/// never block scrolling.
pub fn listen_passive(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), UnveilError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Set one inline style property, logging (not propagating) failures.
pub fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    if let Err(e) = el.style().set_property(prop, value) {
        log::error!("failed to set style {prop}: {e:?}");
    }
}

/// Force an element to its fully revealed end state without animating.
pub fn force_visible(el: &HtmlElement) {
    set_style(el, "opacity", "1");
    set_style(el, "transform", "translateY(0)");
}
