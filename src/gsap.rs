//! Bindings to the optional global GSAP animation library.
//!
//! GSAP is duck-typed at runtime rather than linked: if `window.gsap`
//! exposes callable `set` and `to` methods, animation runs through it;
//! otherwise callers fall back to direct style mutation. Calls go
//! through `js_sys::Reflect`/`Function` so a missing or broken global
//! is an `Err`, never a panic.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Window};

/// Handle to a detected `window.gsap` global.
pub struct Gsap {
    /// `this` binding for method calls.
    target: JsValue,
    set_fn: Function,
    to_fn: Function,
}

impl Gsap {
    /// Duck-type `window.gsap`. Returns `None` unless the global is an
    /// object with callable `set` and `to`.
    #[must_use]
    pub fn detect(window: &Window) -> Option<Self> {
        let gsap = Reflect::get(window, &JsValue::from_str("gsap")).ok()?;
        if !gsap.is_object() {
            return None;
        }
        let set_fn = method(&gsap, "set")?;
        let to_fn = method(&gsap, "to")?;
        Some(Self {
            target: gsap,
            set_fn,
            to_fn,
        })
    }

    /// `gsap.set(el, props)`: apply a style state immediately.
    pub fn set(
        &self,
        el: &HtmlElement,
        props: &Object,
    ) -> Result<(), JsValue> {
        self.set_fn
            .call2(&self.target, el.as_ref(), props.as_ref())
            .map(|_| ())
    }

    /// `gsap.to(el, props)`: animate towards a style state.
    pub fn to(&self, el: &HtmlElement, props: &Object) -> Result<(), JsValue> {
        self.to_fn
            .call2(&self.target, el.as_ref(), props.as_ref())
            .map(|_| ())
    }
}

fn method(obj: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(obj, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Build a JS props object from key/value pairs.
#[must_use]
pub fn props(pairs: &[(&str, JsValue)]) -> Object {
    let obj = Object::new();
    for (key, value) in pairs {
        // Reflect::set only fails on frozen objects; this one is fresh.
        let _ = Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj
}
