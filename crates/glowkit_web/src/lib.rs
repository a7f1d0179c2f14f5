//! Glowkit - WASM page enhancements.
//!
//! This crate wires three independent visual behaviors into a host page:
//! an animated particle background, smooth scrolling for in-page anchor
//! links, and a cursor-tracking glow on buttons. The behaviors share no
//! state; each attaches to the document on its own and fails on its own.

mod error;
pub mod glow;
pub mod particles;
pub mod scroll;

pub use error::{EnhanceError, Result};

use wasm_bindgen::prelude::*;
use web_sys::Document;

/// WASM entry point: enhance the current document.
#[wasm_bindgen(start)]
pub fn start() {
    enhance(&gloo::utils::document());
}

/// Attach all three enhancements to a document.
///
/// A failure in one behavior is logged to the console and does not stop
/// the others from attaching.
pub fn enhance(document: &Document) {
    if let Err(e) = particles::mount(document) {
        web_sys::console::error_1(&format!("particle background failed: {e}").into());
    }
    if let Err(e) = scroll::install(document) {
        web_sys::console::error_1(&format!("smooth scroll failed: {e}").into());
    }
    if let Err(e) = glow::install(document) {
        web_sys::console::error_1(&format!("button glow failed: {e}").into());
    }
}
