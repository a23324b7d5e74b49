//! Session gate and logout.
//!
//! The gate runs on every page load: a live backend session anywhere but
//! the dashboard redirects there. Gate failures are deliberately silent,
//! the user just stays where they are.

use wasm_bindgen_futures::spawn_local;

use crate::constants::{DASHBOARD_PATH, HOME_PATH};
use crate::dom_utils;
use crate::network::ApiClient;

pub fn check_session_redirect() {
    spawn_local(async {
        match ApiClient::check_session().await {
            Ok(status) => {
                if status.logged_in && !on_dashboard() {
                    dom_utils::navigate(DASHBOARD_PATH);
                }
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Session check failed: {:?}", e).into());
            }
        }
    });
}

pub fn on_dashboard() -> bool {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| path.contains(DASHBOARD_PATH))
        .unwrap_or(false)
}

/// Confirm, end the backend session, then return to the landing page.
/// Navigation only happens once the logout POST resolves.
pub fn logout() {
    let confirmed = web_sys::window()
        .map(|w| {
            w.confirm_with_message("Are you sure you want to logout?")
                .unwrap_or(false)
        })
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    spawn_local(async {
        match ApiClient::logout().await {
            Ok(_) => dom_utils::navigate(HOME_PATH),
            Err(e) => {
                web_sys::console::error_1(&format!("Logout failed: {:?}", e).into());
            }
        }
    });
}
