//! Area access request form: posts the selected area and surfaces the
//! backend's verdict in a transient banner under the form.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::constants::{ACCESS_MESSAGE_ID, AREA_SELECT_ID, MESSAGE_TIMEOUT_MS};
use crate::dom_utils;
use crate::models::RequestOutcome;
use crate::network::ApiClient;
use crate::state;

#[derive(Debug, Clone, Copy)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn class_name(self) -> &'static str {
        match self {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
        }
    }
}

/// Read the selected area and submit it. An empty selection never reaches
/// the network.
pub fn submit_request(document: &Document) {
    let area = match dom_utils::select_value(document, AREA_SELECT_ID) {
        Ok(value) => value,
        Err(e) => {
            web_sys::console::error_1(&format!("Area select lookup failed: {:?}", e).into());
            return;
        }
    };

    if area.is_empty() {
        let _ = show_message(document, "Please select an area", MessageKind::Error);
        return;
    }

    let document = document.clone();
    spawn_local(async move {
        match ApiClient::request_access(&area).await {
            Ok(resp) => match serde_json::from_str::<RequestOutcome>(&resp.body) {
                Ok(outcome) if outcome.success => {
                    let _ = show_message(
                        &document,
                        &format!("\u{2713} {}", outcome.message),
                        MessageKind::Success,
                    );
                }
                Ok(outcome) => {
                    let _ = show_message(
                        &document,
                        &format!("\u{2717} {}", outcome.message),
                        MessageKind::Error,
                    );
                }
                Err(e) => {
                    let _ = show_message(&document, &format!("Error: {}", e), MessageKind::Error);
                }
            },
            Err(e) => {
                let _ = show_message(&document, &format!("Error: {:?}", e), MessageKind::Error);
            }
        }
    });
}

/// Show the banner and arm its hide timer. A newer message replaces the
/// pending timer, so the display window restarts instead of stacking.
pub fn show_message(document: &Document, text: &str, kind: MessageKind) -> Result<(), JsValue> {
    let banner = dom_utils::get_element(document, ACCESS_MESSAGE_ID)?;
    banner.set_text_content(Some(text));
    banner.set_class_name(kind.class_name());
    dom_utils::show_el(&banner, "block")?;

    let doc = document.clone();
    let timer = Timeout::new(MESSAGE_TIMEOUT_MS, move || {
        if let Ok(el) = dom_utils::get_element(&doc, ACCESS_MESSAGE_ID) {
            let _ = dom_utils::hide_el(&el);
        }
    });
    state::replace_message_timer(timer);

    Ok(())
}
