//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! The components each own a disjoint region of the page; these wrappers
//! keep the lookup / show / hide boilerplate out of them.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement};

pub fn document() -> Document {
    web_sys::window()
        .expect("no global `window` exists")
        .document()
        .expect("should have a document on window")
}

/// Fetch a fixed element by id. The dashboard markup guarantees these exist,
/// so a miss is a wiring error worth surfacing to the caller.
pub fn get_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} missing from page", id)))
}

pub fn set_text(document: &Document, id: &str, text: &str) -> Result<(), JsValue> {
    get_element(document, id)?.set_text_content(Some(text));
    Ok(())
}

/// Make an element visible with the given `display` value (the modal
/// backdrop lays out with `flex`, everything else uses `block`).
pub fn show_el(el: &Element, display: &str) -> Result<(), JsValue> {
    html_el(el)?.style().set_property("display", display)
}

pub fn hide_el(el: &Element) -> Result<(), JsValue> {
    html_el(el)?.style().set_property("display", "none")
}

/// Read the current value of a `<select>` control.
pub fn select_value(document: &Document, id: &str) -> Result<String, JsValue> {
    let select: HtmlSelectElement = get_element(document, id)?.dyn_into()?;
    Ok(select.value())
}

/// Point the browser at a new path.
pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

fn html_el(el: &Element) -> Result<&HtmlElement, JsValue> {
    el.dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("element is not an HtmlElement"))
}
