//! Shared modal dialog. Both admin data views render into the same single
//! instance; at most one modal is ever visible.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::constants::{MODAL_BODY_ID, MODAL_ID, MODAL_TITLE_ID};
use crate::dom_utils;

/// Fill in title and body markup, then reveal the backdrop. The body is
/// trusted markup built by this crate; dynamic text inside it must already
/// be escaped by the caller.
pub fn show(document: &Document, title: &str, body_html: &str) -> Result<(), JsValue> {
    dom_utils::get_element(document, MODAL_TITLE_ID)?.set_text_content(Some(title));
    dom_utils::get_element(document, MODAL_BODY_ID)?.set_inner_html(body_html);

    let backdrop = dom_utils::get_element(document, MODAL_ID)?;
    dom_utils::show_el(&backdrop, "flex")
}

pub fn hide(document: &Document) -> Result<(), JsValue> {
    let backdrop = dom_utils::get_element(document, MODAL_ID)?;
    dom_utils::hide_el(&backdrop)
}

/// Dismiss the modal when a click lands on the backdrop itself. Clicks on
/// the content area bubble up with a different target and are ignored.
pub fn install_backdrop_handler(document: &Document) -> Result<(), JsValue> {
    // Fail early if the markup is missing the modal entirely.
    let _ = dom_utils::get_element(document, MODAL_ID)?;

    let doc = document.clone();
    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        if let Some(target) = event.target() {
            if let Some(el) = target.dyn_ref::<Element>() {
                if el.id() == MODAL_ID {
                    let _ = hide(&doc);
                }
            }
        }
    }) as Box<dyn FnMut(_)>);

    let window = web_sys::window().expect("no global window exists");
    window.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}
