//! Cursor-tracking glow for button elements.

use gloo::events::EventListener;
use glowkit_core::{PointerOffset, BUTTON_SELECTOR, GLOW_X_PROP, GLOW_Y_PROP};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::error::Result;

/// Register a mousemove handler on every button in the document.
///
/// Each event recomputes the pointer's offset from the button's bounding
/// rect and republishes it through the two glow custom properties; the
/// stylesheet layer turns those into a radial highlight. Returns the
/// number of buttons wired.
pub fn install(document: &Document) -> Result<usize> {
    let buttons = document.query_selector_all(BUTTON_SELECTOR)?;

    let mut wired = 0;
    for i in 0..buttons.length() {
        let Some(node) = buttons.item(i) else {
            continue;
        };
        let Ok(button) = node.dyn_into::<HtmlElement>() else {
            continue;
        };

        let button_for_move = button.clone();
        let listener = EventListener::new(&button, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };

            let rect = button_for_move.get_bounding_client_rect();
            let offset = PointerOffset::from_client(
                event.client_x() as f64,
                event.client_y() as f64,
                rect.left(),
                rect.top(),
            );

            let css = button_for_move.style();
            let _ = css.set_property(GLOW_X_PROP, &offset.css_x());
            let _ = css.set_property(GLOW_Y_PROP, &offset.css_y());
        });
        listener.forget();
        wired += 1;
    }

    Ok(wired)
}
