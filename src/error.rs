//! Crate-level error types.

use std::fmt;

use wasm_bindgen::JsValue;

/// Errors produced while wiring up the page.
///
/// These are logged by the entry point and never surfaced to the page;
/// setup routines are independent, so one failing never stops the rest.
#[derive(Debug)]
pub enum UnveilError {
    /// No global `window` object in this environment.
    MissingWindow,
    /// The global window has no `document`.
    MissingDocument,
    /// A DOM call failed (invalid selector, listener registration, ...).
    Dom(String),
}

impl fmt::Display for UnveilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWindow => write!(f, "no global window object"),
            Self::MissingDocument => write!(f, "window has no document"),
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for UnveilError {}

impl From<JsValue> for UnveilError {
    fn from(value: JsValue) -> Self {
        Self::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}
