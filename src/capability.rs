//! One-shot feature detection for optional browser facilities.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::gsap::Gsap;

/// Capability flags resolved once at initialization and threaded into
/// the setup routines as configuration, never re-checked ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// A usable GSAP global is present.
    pub animation: bool,
    /// `IntersectionObserver` is available.
    pub observer: bool,
}

impl Capabilities {
    /// Resolve both flags against an already-detected (or absent) GSAP
    /// handle. No side effects.
    #[must_use]
    pub fn resolve(window: &Window, gsap: Option<&Gsap>) -> Self {
        Self {
            animation: gsap.is_some(),
            observer: has_intersection_observer(window),
        }
    }
}

/// Whether the `IntersectionObserver` constructor exists on `window`.
#[must_use]
pub fn has_intersection_observer(window: &Window) -> bool {
    Reflect::get(window, &JsValue::from_str("IntersectionObserver"))
        .is_ok_and(|v| v.is_function())
}
