//! Smooth-scroll interception for in-page fragment anchors.

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use glowkit_core::{fragment_id, FRAGMENT_ANCHOR_SELECTOR};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::error::Result;

/// Register a click handler on every fragment anchor in the document.
///
/// Each click suppresses the default jump and, when the referenced
/// element exists, requests a smooth scroll to it. A bare `#`, an
/// unparseable href, or a missing target leaves the page untouched.
/// Returns the number of anchors wired; listeners live for the page
/// lifetime.
pub fn install(document: &Document) -> Result<usize> {
    let anchors = document.query_selector_all(FRAGMENT_ANCHOR_SELECTOR)?;

    let mut wired = 0;
    for i in 0..anchors.length() {
        let Some(node) = anchors.item(i) else {
            continue;
        };
        let Ok(anchor) = node.dyn_into::<Element>() else {
            continue;
        };

        let document = document.clone();
        let anchor_for_click = anchor.clone();
        let listener = EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event| {
                event.prevent_default();

                // The href is read per click so late edits are honored.
                let Some(href) = anchor_for_click.get_attribute("href") else {
                    return;
                };
                let Some(id) = fragment_id(&href) else {
                    return;
                };
                if let Some(target) = document.get_element_by_id(id) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            },
        );
        listener.forget();
        wired += 1;
    }

    Ok(wired)
}
