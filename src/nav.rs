//! Navigation bar scroll-state toggling.

use web_sys::{Document, HtmlElement, Window};

use crate::dom;
use crate::error::UnveilError;
use crate::options::NavOptions;

/// Whether the page counts as scrolled at `scroll_y`.
#[must_use]
pub const fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Reflect scroll position into a class on the nav element.
///
/// The state is evaluated once immediately (pages can load mid-scroll)
/// and on every scroll event after that. The listener is passive.
/// Absent nav element: nothing is registered.
pub fn setup(
    window: &Window,
    document: &Document,
    options: &NavOptions,
) -> Result<(), UnveilError> {
    let Some(nav) = dom::query_first(document, &options.selector)? else {
        return Ok(());
    };

    let class = options.scrolled_class.clone();
    let threshold = options.scroll_threshold_px;
    let win = window.clone();
    let on_scroll = move || {
        let y = win.scroll_y().unwrap_or(0.0);
        apply(&nav, &class, is_scrolled(y, threshold));
    };

    on_scroll();
    dom::listen_passive(window, "scroll", move |_| on_scroll())
}

fn apply(nav: &HtmlElement, class: &str, scrolled: bool) {
    let result = if scrolled {
        nav.class_list().add_1(class)
    } else {
        nav.class_list().remove_1(class)
    };
    if let Err(e) = result {
        log::error!("failed to toggle {class}: {e:?}");
    }
}
