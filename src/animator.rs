//! Capability-gated element reveal animation.

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::dom;
use crate::gsap::{self, Gsap};
use crate::options::RevealOptions;

/// Transitions single elements from hidden to visible.
///
/// When GSAP is unavailable, or a GSAP call throws, the element is
/// forced to its fully visible end state by direct style mutation and
/// the failure is logged; nothing ever propagates to the caller.
/// Callers are responsible for at-most-once invocation per element.
pub struct Animator {
    gsap: Option<Gsap>,
    duration_secs: f64,
    offset_px: f64,
    ease: String,
}

impl Animator {
    /// Build an animator around a detected (or absent) GSAP handle.
    #[must_use]
    pub fn new(gsap: Option<Gsap>, options: &RevealOptions) -> Self {
        Self {
            gsap,
            duration_secs: options.duration_secs,
            offset_px: options.offset_px,
            ease: options.ease.clone(),
        }
    }

    /// Whether reveals will actually animate (GSAP present).
    #[must_use]
    pub const fn has_animation(&self) -> bool {
        self.gsap.is_some()
    }

    /// Reveal `element` after `delay_secs` seconds.
    pub fn reveal(&self, element: &HtmlElement, delay_secs: f64) {
        let Some(handle) = &self.gsap else {
            dom::force_visible(element);
            return;
        };
        if let Err(e) = self.animate(handle, element, delay_secs) {
            log::error!("animation failed: {e:?}; forcing element visible");
            dom::force_visible(element);
        }
    }

    fn animate(
        &self,
        handle: &Gsap,
        element: &HtmlElement,
        delay_secs: f64,
    ) -> Result<(), JsValue> {
        handle.set(
            element,
            &gsap::props(&[
                ("opacity", JsValue::from_f64(0.0)),
                ("y", JsValue::from_f64(self.offset_px)),
            ]),
        )?;
        handle.to(
            element,
            &gsap::props(&[
                ("opacity", JsValue::from_f64(1.0)),
                ("y", JsValue::from_f64(0.0)),
                ("duration", JsValue::from_f64(self.duration_secs)),
                ("delay", JsValue::from_f64(delay_secs)),
                ("ease", JsValue::from_str(&self.ease)),
            ]),
        )
    }
}
