//! Hover pause control for the continuously scrolling logo strip.

use web_sys::Document;

use crate::dom;
use crate::error::UnveilError;
use crate::options::MarqueeOptions;

/// Pause the strip's CSS animation while the pointer is over it and
/// resume on leave. Absent strip element: nothing is registered.
pub fn setup(
    document: &Document,
    options: &MarqueeOptions,
) -> Result<(), UnveilError> {
    let Some(strip) = dom::query_first(document, &options.selector)? else {
        return Ok(());
    };

    let enter_strip = strip.clone();
    dom::listen(&strip, "mouseenter", move |_| {
        dom::set_style(&enter_strip, "animation-play-state", "paused");
    })?;

    let leave_strip = strip.clone();
    dom::listen(&strip, "mouseleave", move |_| {
        dom::set_style(&leave_strip, "animation-play-state", "running");
    })
}
