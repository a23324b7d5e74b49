//! Profile card: fetches the signed-in soldier's profile and fills the
//! greeting, the profile fields, and the access-area badge list.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::constants::{
    ACCESS_AREAS_ID, LOGIN_PATH, LOGIN_TIME_ID, PROFILE_CLEARANCE_ID, PROFILE_NAME_ID,
    PROFILE_RANK_ID, PROFILE_UNIT_ID, USER_GREETING_ID,
};
use crate::dom_utils;
use crate::models::{MaybeError, Profile};
use crate::network::ApiClient;
use crate::utils;

/// Kick off the profile load. Authentication failures and transport or
/// parse errors all end at the login page; only a clean response renders.
pub fn load_profile() {
    spawn_local(async {
        let document = dom_utils::document();
        if let Err(e) = fetch_and_render(&document).await {
            web_sys::console::error_1(&format!("Error loading profile: {:?}", e).into());
            dom_utils::navigate(LOGIN_PATH);
        }
    });
}

async fn fetch_and_render(document: &Document) -> Result<(), JsValue> {
    let resp = ApiClient::get_profile().await?;

    if resp.status == 401 {
        dom_utils::navigate(LOGIN_PATH);
        return Ok(());
    }

    let probe: MaybeError = serde_json::from_str(&resp.body)
        .map_err(|e| JsValue::from_str(&format!("Malformed profile response: {}", e)))?;
    if probe.error.is_some() {
        dom_utils::navigate(LOGIN_PATH);
        return Ok(());
    }

    let profile: Profile = serde_json::from_str(&resp.body)
        .map_err(|e| JsValue::from_str(&format!("Malformed profile response: {}", e)))?;

    render_profile(document, &profile)
}

/// Write the profile fields verbatim and derive the greeting from rank and
/// name. The login-time stamp is the client clock, not a server value.
pub fn render_profile(document: &Document, profile: &Profile) -> Result<(), JsValue> {
    dom_utils::set_text(document, PROFILE_NAME_ID, &profile.name)?;
    dom_utils::set_text(document, PROFILE_RANK_ID, &profile.rank)?;
    dom_utils::set_text(document, PROFILE_UNIT_ID, &profile.unit)?;
    dom_utils::set_text(document, PROFILE_CLEARANCE_ID, &profile.clearance_level)?;

    dom_utils::set_text(
        document,
        USER_GREETING_ID,
        &format!("Welcome, {} {}", profile.rank, profile.name),
    )?;

    render_access_areas(document, &profile.access_areas)?;

    dom_utils::set_text(document, LOGIN_TIME_ID, &utils::current_locale_time())
}

/// One badge per authorized area, in the order the backend listed them.
/// No dedup, no sorting.
pub fn render_access_areas(document: &Document, areas: &[String]) -> Result<(), JsValue> {
    let container = dom_utils::get_element(document, ACCESS_AREAS_ID)?;
    container.set_inner_html("");

    if areas.is_empty() {
        let placeholder = document.create_element("p")?;
        placeholder.set_text_content(Some("No authorized areas"));
        container.append_child(&placeholder)?;
        return Ok(());
    }

    for area in areas {
        let item = document.create_element("div")?;
        item.set_class_name("access-item granted");
        item.set_text_content(Some(&utils::format_area_name(area)));
        container.append_child(&item)?;
    }

    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::constants::*;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fresh_div(document: &Document, id: &str) -> Element {
        if let Some(old) = document.get_element_by_id(id) {
            old.remove();
        }
        let el = document.create_element("div").unwrap();
        el.set_id(id);
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn empty_area_list_renders_placeholder() {
        let document = dom_utils::document();
        let container = fresh_div(&document, ACCESS_AREAS_ID);

        render_access_areas(&document, &[]).unwrap();

        assert_eq!(container.child_element_count(), 1);
        assert_eq!(
            container.text_content().unwrap(),
            "No authorized areas"
        );
    }

    #[wasm_bindgen_test]
    fn badges_keep_input_order_and_formatting() {
        let document = dom_utils::document();
        let container = fresh_div(&document, ACCESS_AREAS_ID);

        let areas = vec!["motor_pool".to_string(), "arms_room".to_string()];
        render_access_areas(&document, &areas).unwrap();

        assert_eq!(container.child_element_count(), 2);
        let first = container.first_element_child().unwrap();
        assert_eq!(first.text_content().unwrap(), "MOTOR POOL");
        assert_eq!(first.class_name(), "access-item granted");
        let second = first.next_element_sibling().unwrap();
        assert_eq!(second.text_content().unwrap(), "ARMS ROOM");
    }

    #[wasm_bindgen_test]
    fn full_profile_render_populates_every_region() {
        let document = dom_utils::document();
        for id in [
            PROFILE_NAME_ID,
            PROFILE_RANK_ID,
            PROFILE_UNIT_ID,
            PROFILE_CLEARANCE_ID,
            USER_GREETING_ID,
            LOGIN_TIME_ID,
            ACCESS_AREAS_ID,
        ] {
            fresh_div(&document, id);
        }

        let profile = Profile {
            name: "Doe".to_string(),
            rank: "CPT".to_string(),
            unit: "1st".to_string(),
            clearance_level: "TOP SECRET".to_string(),
            access_areas: vec!["motor_pool".to_string(), "arms_room".to_string()],
        };
        render_profile(&document, &profile).unwrap();

        let text = |id: &str| {
            document
                .get_element_by_id(id)
                .unwrap()
                .text_content()
                .unwrap()
        };
        assert_eq!(text(USER_GREETING_ID), "Welcome, CPT Doe");
        assert_eq!(text(PROFILE_NAME_ID), "Doe");
        assert_eq!(text(PROFILE_CLEARANCE_ID), "TOP SECRET");
        assert!(!text(LOGIN_TIME_ID).is_empty());

        let container = document.get_element_by_id(ACCESS_AREAS_ID).unwrap();
        assert_eq!(container.child_element_count(), 2);
    }
}
