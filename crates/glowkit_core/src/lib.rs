//! Shared types and pure logic for the glowkit page enhancements.
//!
//! This crate defines the DOM contract (element ids, class names,
//! selectors, custom property names) and the platform-independent pieces
//! of the three page behaviors: particle style sampling, fragment
//! reference parsing, and pointer offset computation. Nothing here
//! touches the DOM, so everything is testable on the host.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Element id of the particle background container.
pub const PARTICLE_CONTAINER_ID: &str = "particle-bg";

/// Class applied to each decorative particle element.
pub const PARTICLE_CLASS: &str = "particle";

/// Selector matching anchors whose href is an in-page fragment reference.
pub const FRAGMENT_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector matching elements that receive the glow effect.
pub const BUTTON_SELECTOR: &str = ".btn";

/// Custom property carrying the pointer's horizontal offset within a button.
pub const GLOW_X_PROP: &str = "--x";

/// Custom property carrying the pointer's vertical offset within a button.
pub const GLOW_Y_PROP: &str = "--y";

/// Configuration for the particle background.
///
/// All ranges are half-open: a sampled value is at least the lower bound
/// and strictly below the upper bound. `Default` matches the shipped
/// visual: sixty particles drifting upward over 8-16 seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Number of particle elements to create.
    pub count: u32,
    /// Upper bound for the horizontal position, in percent of the page width.
    pub left_max_pct: f64,
    /// Upper bound for the vertical offset from the page bottom, in pixels.
    pub bottom_max_px: f64,
    /// Lower bound for the float animation duration, in seconds.
    pub duration_min_s: f64,
    /// Upper bound for the float animation duration, in seconds.
    pub duration_max_s: f64,
    /// Upper bound for the animation start delay, in seconds.
    pub delay_max_s: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 60,
            left_max_pct: 100.0,
            bottom_max_px: 100.0,
            duration_min_s: 8.0,
            duration_max_s: 16.0,
            delay_max_s: 10.0,
        }
    }
}

/// Randomized styling for a single particle element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleStyle {
    /// Horizontal position, in percent of the page width.
    pub left_pct: f64,
    /// Vertical offset from the page bottom, in pixels.
    pub bottom_px: f64,
    /// Float animation duration, in seconds.
    pub duration_s: f64,
    /// Animation start delay, in seconds.
    pub delay_s: f64,
}

impl ParticleStyle {
    /// Draw a style from the configured ranges.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, config: &ParticleConfig) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..config.left_max_pct),
            bottom_px: rng.gen_range(0.0..config.bottom_max_px),
            duration_s: rng.gen_range(config.duration_min_s..config.duration_max_s),
            delay_s: rng.gen_range(0.0..config.delay_max_s),
        }
    }

    /// CSS value for the `left` property.
    pub fn css_left(&self) -> String {
        format!("{}%", self.left_pct)
    }

    /// CSS value for the `bottom` property.
    pub fn css_bottom(&self) -> String {
        format!("{}px", self.bottom_px)
    }

    /// CSS value for the `animation-duration` property.
    pub fn css_duration(&self) -> String {
        format!("{}s", self.duration_s)
    }

    /// CSS value for the `animation-delay` property.
    pub fn css_delay(&self) -> String {
        format!("{}s", self.delay_s)
    }
}

/// Extract the target element id from an anchor's href.
///
/// Accepts only in-page fragment references with a non-empty id
/// (`"#about"` yields `"about"`). A bare `"#"`, an empty string, or a
/// non-fragment href yields `None`; callers treat that as a no-op rather
/// than an error.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Pointer position relative to an element's top-left corner.
///
/// Recomputed in full on every pointer event; nothing persists between
/// events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerOffset {
    /// Horizontal offset, in CSS pixels.
    pub x: f64,
    /// Vertical offset, in CSS pixels.
    pub y: f64,
}

impl PointerOffset {
    /// Compute the offset of a client-space pointer position from an
    /// element's bounding rect origin.
    pub fn from_client(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Self {
        Self {
            x: client_x - rect_left,
            y: client_y - rect_top,
        }
    }

    /// CSS value for the horizontal glow property.
    pub fn css_x(&self) -> String {
        format!("{}px", self.x)
    }

    /// CSS value for the vertical glow property.
    pub fn css_y(&self) -> String {
        format!("{}px", self.y)
    }
}
