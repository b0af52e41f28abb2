// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// String hygiene
#![deny(clippy::str_to_string)]
// DOM metrics are i32/usize; the casts are intentional and safe
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
// Float comparison: thresholds and defaults compare against exact literals
#![allow(clippy::float_cmp)]

//! Scroll-reveal and navigation effects for static pages, compiled to
//! WebAssembly.
//!
//! Once the page's DOM is ready, [`run`] wires up five independent
//! routines, in order:
//!
//! 1. Reveal-on-scroll animation for `.reveal-content` elements
//!    ([`reveal`]), driven by GSAP when present.
//! 2. A `nav-scrolled` class toggle on `.nav-container` ([`nav`]).
//! 3. Smooth scrolling for same-page anchor links ([`anchors`]).
//! 4. Hover pause/resume for the `.tech-scroll` strip ([`marquee`]).
//! 5. Staggered reveal for `.project-card` elements ([`cards`]).
//!
//! The routines share no state. Both external collaborators — the GSAP
//! animation library and `IntersectionObserver` — are optional; their
//! absence selects documented degraded paths ([`capability`]), never an
//! error. Selectors and timings are configurable via JSON
//! ([`run_with_config`]).

pub mod anchors;
pub mod animator;
pub mod capability;
pub mod cards;
pub mod dom;
pub mod error;
pub mod gsap;
pub mod marquee;
pub mod nav;
pub mod options;
pub mod reveal;
pub mod util;

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::wasm_bindgen;

use crate::animator::Animator;
use crate::capability::Capabilities;
use crate::error::UnveilError;
use crate::gsap::Gsap;
use crate::options::Options;

static STARTED: AtomicBool = AtomicBool::new(false);

/// Module load hook: install the panic hook and console logging. Setup
/// itself is driven by [`run`] / [`run_with_config`] so host pages can
/// pass configuration first.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Err means the host already installed a logger; keep going.
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Run all setup routines with default options once the DOM is ready.
/// Repeat calls are ignored.
#[wasm_bindgen]
pub fn run() {
    run_with(Options::default());
}

/// Like [`run`], with JSON configuration overrides (see
/// [`options::Options`]). Invalid JSON logs a warning and falls back to
/// defaults.
#[wasm_bindgen(js_name = runWithConfig)]
pub fn run_with_config(json: &str) {
    let options = match Options::from_json(json) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("invalid configuration JSON ({e}); using defaults");
            Options::default()
        }
    };
    run_with(options);
}

fn run_with(options: Options) {
    if STARTED.swap(true, Ordering::Relaxed) {
        log::warn!("already initialized; ignoring repeat call");
        return;
    }
    if let Err(e) = when_ready(options) {
        log::error!("setup failed: {e}");
    }
}

/// Defer setup until `DOMContentLoaded` if the document is still
/// loading, otherwise run immediately.
fn when_ready(options: Options) -> Result<(), UnveilError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Err(e) = setup(&options) {
                log::error!("setup failed: {e}");
            }
        })
    } else {
        setup(&options)
    }
}

/// Run the five setup routines in order. A failure in one routine is
/// logged and never stops the others.
fn setup(options: &Options) -> Result<(), UnveilError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let handle = Gsap::detect(&window);
    let caps = Capabilities::resolve(&window, handle.as_ref());
    log::debug!(
        "capabilities: animation={}, observer={}",
        caps.animation,
        caps.observer
    );
    let animator = Animator::new(handle, &options.reveal);

    report(
        reveal::setup(&document, &options.reveal, animator, caps.observer),
        "reveal",
    );
    report(nav::setup(&window, &document, &options.nav), "nav");
    report(anchors::setup(&window, &document, &options.nav), "anchors");
    report(marquee::setup(&document, &options.marquee), "marquee");
    report(
        cards::setup(&window, &document, &options.cards, caps.observer),
        "cards",
    );
    Ok(())
}

fn report(result: Result<(), UnveilError>, routine: &str) {
    if let Err(e) = result {
        log::error!("{routine} setup failed: {e}");
    }
}
