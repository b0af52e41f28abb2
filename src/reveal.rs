//! Reveal-on-visibility controller for marked content elements.
//!
//! Each element is revealed at most once: the first qualifying
//! intersection invokes the animator, then the element is unobserved.
//! Without `IntersectionObserver`, all elements reveal immediately in
//! document order with a small per-index stagger.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::animator::Animator;
use crate::dom;
use crate::error::UnveilError;
use crate::options::RevealOptions;
use crate::util;

/// Wire up reveal-on-scroll for all elements matching the configured
/// selector.
pub fn setup(
    document: &Document,
    options: &RevealOptions,
    animator: Animator,
    observer_available: bool,
) -> Result<(), UnveilError> {
    let elements = dom::query_all(document, &options.selector)?;
    if elements.is_empty() {
        return Ok(());
    }

    // Degraded pass: without the animation library everything becomes
    // visible up front, before any observation happens.
    if !animator.has_animation() {
        log::warn!(
            "GSAP not found; revealing {} elements without animation",
            elements.len()
        );
        for el in &elements {
            dom::force_visible(el);
        }
    }

    if observer_available {
        observe(&elements, options, animator)
    } else {
        log::warn!(
            "IntersectionObserver not supported; revealing all marked \
             elements immediately"
        );
        for (index, el) in elements.iter().enumerate() {
            animator
                .reveal(el, fallback_delay(index, options.fallback_stagger_secs));
        }
        Ok(())
    }
}

fn observe(
    elements: &[HtmlElement],
    options: &RevealOptions,
    animator: Animator,
) -> Result<(), UnveilError> {
    let attribute = options.delay_attribute.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let delay = util::parse_delay(
                    target.get_attribute(&attribute).as_deref(),
                );
                if let Ok(el) = target.clone().dyn_into::<HtmlElement>() {
                    animator.reveal(&el, delay);
                }
                // One-shot: never re-triggered for this element.
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    )?;
    for el in elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

/// Delay for the `index`-th element on the no-observer path, so
/// elements still appear to reveal in a staggered sequence.
#[must_use]
pub const fn fallback_delay(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_delays_are_strictly_increasing() {
        let delays: Vec<f64> =
            (0..5).map(|i| fallback_delay(i, 0.1)).collect();
        assert_eq!(delays[0], 0.0);
        for pair in delays.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn fallback_delay_scales_with_step() {
        assert_eq!(fallback_delay(0, 0.1), 0.0);
        assert_eq!(fallback_delay(1, 0.1), 0.1);
        assert_eq!(fallback_delay(4, 0.25), 1.0);
    }
}
