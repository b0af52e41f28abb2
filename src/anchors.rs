//! Smooth scrolling for same-page anchor links.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::dom;
use crate::error::UnveilError;
use crate::options::NavOptions;

/// Nav bar height used for scroll offset math. An absent nav or a zero
/// reported height falls back to the configured default.
#[must_use]
pub fn effective_nav_height(offset_height: Option<i32>, fallback_px: f64) -> f64 {
    match offset_height {
        Some(h) if h > 0 => f64::from(h),
        _ => fallback_px,
    }
}

/// Destination scroll offset for a target at `target_top`: the target's
/// document offset minus the nav bar height.
#[must_use]
pub fn scroll_target(target_top: i32, nav_height_px: f64) -> f64 {
    f64::from(target_top) - nav_height_px
}

/// Intercept clicks on `a[href^="#"]` links and animate the scroll to
/// the target instead of jumping.
///
/// A bare `"#"` href keeps its default behavior. A fragment with no
/// matching element suppresses the default and does nothing further.
pub fn setup(
    window: &Window,
    document: &Document,
    options: &NavOptions,
) -> Result<(), UnveilError> {
    // Queried once; the height is read at click time so layout changes
    // are picked up.
    let nav = dom::query_first(document, &options.selector)?;

    for link in dom::query_all(document, "a[href^='#']")? {
        let win = window.clone();
        let doc = document.clone();
        let nav = nav.clone();
        let fallback = options.fallback_height_px;
        let anchor = link.clone();
        dom::listen(&link, "click", move |event: Event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            event.prevent_default();
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            let Ok(target) = target.dyn_into::<HtmlElement>() else {
                return;
            };
            let height = effective_nav_height(
                nav.as_ref().map(HtmlElement::offset_height),
                fallback,
            );
            smooth_scroll_to(&win, scroll_target(target.offset_top(), height));
        })?;
    }
    Ok(())
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_target_minus_nav_height() {
        assert_eq!(scroll_target(800, 60.0), 740.0);
        assert_eq!(scroll_target(100, 60.0), 40.0);
    }

    #[test]
    fn missing_nav_uses_fallback_height() {
        assert_eq!(effective_nav_height(None, 60.0), 60.0);
    }

    #[test]
    fn zero_height_uses_fallback() {
        assert_eq!(effective_nav_height(Some(0), 60.0), 60.0);
    }

    #[test]
    fn positive_height_wins() {
        assert_eq!(effective_nav_height(Some(72), 60.0), 72.0);
    }
}
