//! Dashboard page bootstrap: kicks off the profile and admin-gate loads,
//! then wires the interactive controls to their handlers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use crate::components::{access_request, admin_panel, data_table, modal, profile_card, session};
use crate::constants::{
    LOGOUT_BTN_ID, REQUEST_ACCESS_BTN_ID, VIEW_ACCESS_LOG_BTN_ID, VIEW_PERSONNEL_BTN_ID,
};
use crate::dom_utils;

/// Mount all dashboard behavior. Called once from `start()` when the
/// current page is the dashboard.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    profile_card::load_profile();
    admin_panel::check_admin_access();

    modal::install_backdrop_handler(document)?;

    attach_click(document, REQUEST_ACCESS_BTN_ID, access_request::submit_request)?;
    attach_click(document, VIEW_ACCESS_LOG_BTN_ID, data_table::view_access_log)?;
    attach_click(document, VIEW_PERSONNEL_BTN_ID, data_table::view_all_personnel)?;
    attach_click(document, LOGOUT_BTN_ID, |_| session::logout())?;

    Ok(())
}

fn attach_click(
    document: &Document,
    id: &str,
    handler: impl Fn(&Document) + 'static,
) -> Result<(), JsValue> {
    let button = dom_utils::get_element(document, id)?;

    let document = document.clone();
    let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
        handler(&document);
    }) as Box<dyn FnMut(_)>);

    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}
