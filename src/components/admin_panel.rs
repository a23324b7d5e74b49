//! Admin panel visibility gate.
//!
//! Fetches the profile independently of the profile card and reveals the
//! panel only on an exact clearance match. This is a display toggle, not an
//! authorization decision: the listing endpoints re-check on the server and
//! answer 403 regardless of what this code shows.

use wasm_bindgen_futures::spawn_local;

use crate::constants::{ADMIN_CLEARANCE, ADMIN_PANEL_ID};
use crate::dom_utils;
use crate::models::Profile;
use crate::network::ApiClient;

/// Any failure along the way leaves the panel hidden; there is nothing to
/// tell the user.
pub fn check_admin_access() {
    spawn_local(async {
        let resp = match ApiClient::get_profile().await {
            Ok(resp) => resp,
            Err(_) => return,
        };

        let profile: Profile = match serde_json::from_str(&resp.body) {
            Ok(profile) => profile,
            Err(_) => return,
        };

        if profile.clearance_level == ADMIN_CLEARANCE {
            let document = dom_utils::document();
            if let Ok(panel) = dom_utils::get_element(&document, ADMIN_PANEL_ID) {
                let _ = dom_utils::show_el(&panel, "block");
            }
        }
    });
}
