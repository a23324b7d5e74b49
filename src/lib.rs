use wasm_bindgen::prelude::*;

mod components;
mod constants;
mod dom_utils;
mod models;
mod network;
mod pages;
mod state;
mod utils;

use components::session;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // Every page checks the session; a live one belongs on the dashboard.
    session::check_session_redirect();

    // The rest of the wiring only applies to the dashboard itself.
    if session::on_dashboard() {
        pages::dashboard::mount(&document)?;
    }

    Ok(())
}
