//! Runtime configuration with JSON override support.
//!
//! All tweakable settings (selectors, thresholds, timings) are
//! consolidated here. Host pages may override any subset via
//! [`crate::run_with_config`]; sub-structs use `#[serde(default)]` so a
//! partial JSON document (e.g. only overriding `nav`) works correctly.

use serde::{Deserialize, Serialize};

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Reveal-on-scroll content animation.
    pub reveal: RevealOptions,
    /// Navigation bar scroll state and anchor offset math.
    pub nav: NavOptions,
    /// Staggered project-card reveal.
    pub cards: CardOptions,
    /// Scrolling logo strip hover control.
    pub marquee: MarqueeOptions,
}

impl Options {
    /// Parse options from a JSON document. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Settings for the reveal-on-scroll animation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealOptions {
    /// Selector for revealable content elements.
    pub selector: String,
    /// Attribute read for the per-element reveal delay (seconds).
    pub delay_attribute: String,
    /// Intersection ratio at which an element counts as visible.
    pub threshold: f64,
    /// Animation duration in seconds.
    pub duration_secs: f64,
    /// Initial downward offset in pixels.
    pub offset_px: f64,
    /// Per-index delay step (seconds) on the no-observer fallback path.
    pub fallback_stagger_secs: f64,
    /// GSAP easing name.
    pub ease: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: ".reveal-content".to_owned(),
            delay_attribute: "data-delay".to_owned(),
            threshold: 0.1,
            duration_secs: 0.6,
            offset_px: 30.0,
            fallback_stagger_secs: 0.1,
            ease: "power2.out".to_owned(),
        }
    }
}

/// Settings for the navigation bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavOptions {
    /// Selector for the navigation container.
    pub selector: String,
    /// Class added once the page scrolls past the threshold.
    pub scrolled_class: String,
    /// Scroll depth in pixels beyond which the nav counts as scrolled.
    pub scroll_threshold_px: f64,
    /// Height assumed for anchor offset math when the nav is absent or
    /// reports zero height.
    pub fallback_height_px: f64,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            selector: ".nav-container".to_owned(),
            scrolled_class: "nav-scrolled".to_owned(),
            scroll_threshold_px: 50.0,
            fallback_height_px: 60.0,
        }
    }
}

/// Settings for the staggered project-card reveal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CardOptions {
    /// Selector for project cards.
    pub selector: String,
    /// Intersection ratio at which a card counts as visible.
    pub threshold: f64,
    /// Per-index reveal delay step in milliseconds.
    pub stagger_step_ms: i32,
    /// Initial downward offset in pixels.
    pub offset_px: f64,
    /// CSS transition duration in seconds.
    pub transition_secs: f64,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            selector: ".project-card".to_owned(),
            threshold: 0.1,
            stagger_step_ms: 100,
            offset_px: 30.0,
            transition_secs: 0.6,
        }
    }
}

/// Settings for the scrolling logo strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarqueeOptions {
    /// Selector for the strip element.
    pub selector: String,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            selector: ".tech-scroll".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let opts = Options::default();
        assert_eq!(opts.reveal.selector, ".reveal-content");
        assert_eq!(opts.reveal.threshold, 0.1);
        assert_eq!(opts.nav.scroll_threshold_px, 50.0);
        assert_eq!(opts.nav.fallback_height_px, 60.0);
        assert_eq!(opts.cards.stagger_step_ms, 100);
        assert_eq!(opts.marquee.selector, ".tech-scroll");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{ "nav": { "scroll_threshold_px": 120.0 } }"#;
        let opts = Options::from_json(json).unwrap();
        assert_eq!(opts.nav.scroll_threshold_px, 120.0);
        // Everything else should be default
        assert_eq!(opts.nav.scrolled_class, "nav-scrolled");
        assert_eq!(opts.reveal, RevealOptions::default());
        assert_eq!(opts.cards, CardOptions::default());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(Options::from_json("not json").is_err());
    }

    #[test]
    fn default_round_trips_through_json() {
        let opts = Options::default();
        let json = serde_json::to_string(&opts).unwrap();
        let parsed = Options::from_json(&json).unwrap();
        assert_eq!(opts, parsed);
    }
}
