//! Staggered project-card reveal.
//!
//! Deliberately independent of the GSAP-gated animator: cards get a CSS
//! transition at setup and are revealed by direct style mutation, so
//! this path behaves identically with or without the animation library.
//! It only runs when `IntersectionObserver` is available; without it,
//! cards are never hidden in the first place.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::dom;
use crate::error::UnveilError;
use crate::options::CardOptions;

/// Reveal delay for the `index`-th entry of an intersection batch.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: i32) -> i32 {
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(step_ms)
}

/// Hide all matching cards, then reveal each with an index-proportional
/// stagger once it first becomes visible.
pub fn setup(
    window: &Window,
    document: &Document,
    options: &CardOptions,
    observer_available: bool,
) -> Result<(), UnveilError> {
    if !observer_available {
        return Ok(());
    }
    let cards = dom::query_all(document, &options.selector)?;
    if cards.is_empty() {
        return Ok(());
    }

    let win = window.clone();
    let step_ms = options.stagger_step_ms;
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Ok(card) = target.clone().dyn_into::<HtmlElement>() {
                    schedule_reveal(
                        &win,
                        &card,
                        stagger_delay_ms(index, step_ms),
                    );
                }
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

    let transition = format!(
        "opacity {0}s ease, transform {0}s ease",
        options.transition_secs
    );
    for card in &cards {
        dom::set_style(card, "opacity", "0");
        dom::set_style(
            card,
            "transform",
            &format!("translateY({}px)", options.offset_px),
        );
        dom::set_style(card, "transition", &transition);
        observer.observe(card);
    }
    callback.forget();
    Ok(())
}

/// Run the reveal after `delay_ms` on the browser timer.
fn schedule_reveal(window: &Window, card: &HtmlElement, delay_ms: i32) {
    let card = card.clone();
    let reveal = Closure::<dyn FnMut()>::new(move || dom::force_visible(&card));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        reveal.as_ref().unchecked_ref(),
        delay_ms,
    ) {
        log::error!("failed to schedule card reveal: {e:?}");
    }
    reveal.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_index_proportional() {
        assert_eq!(stagger_delay_ms(0, 100), 0);
        assert_eq!(stagger_delay_ms(1, 100), 100);
        assert_eq!(stagger_delay_ms(5, 100), 500);
    }

    #[test]
    fn huge_indices_saturate() {
        assert_eq!(stagger_delay_ms(usize::MAX, 100), i32::MAX);
    }
}
