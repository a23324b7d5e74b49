//! Admin data views: the access log and the personnel roster, rendered as
//! HTML tables inside the shared modal.
//!
//! Every server-provided string is escaped before it reaches the markup.
//! Each triggered fetch takes a fresh generation from `state`; a response
//! whose generation has been superseded (double-click, slow backend) is
//! dropped instead of overwriting the newer content.

use std::collections::BTreeMap;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::components::modal;
use crate::models::{
    AccessLogEntry, AccessLogResponse, MaybeError, PersonnelRecord, PersonnelResponse,
};
use crate::network::{ApiClient, ApiResponse};
use crate::state;
use crate::utils::{escape_html, locale_string_from_iso};

const PERMISSION_DENIED_BODY: &str = "<p>You do not have permission to view this data.</p>";

pub fn view_access_log(document: &Document) {
    let generation = state::next_table_generation();
    let document = document.clone();
    spawn_local(async move {
        let resp = ApiClient::get_access_log().await;
        render_listing(&document, generation, "Access Log", resp, |body| {
            let parsed: AccessLogResponse =
                serde_json::from_str(body).map_err(|e| e.to_string())?;
            Ok(build_access_log_table(&parsed.log))
        });
    });
}

pub fn view_all_personnel(document: &Document) {
    let generation = state::next_table_generation();
    let document = document.clone();
    spawn_local(async move {
        let resp = ApiClient::get_all_personnel().await;
        render_listing(&document, generation, "All Personnel", resp, |body| {
            let parsed: PersonnelResponse =
                serde_json::from_str(body).map_err(|e| e.to_string())?;
            Ok(build_personnel_table(&parsed.personnel))
        });
    });
}

/// Shared handling for the listing endpoints: 403 before anything else (the
/// body is never parsed on a denial), then the `{error}` shape, then the
/// actual table, with transport failures surfacing as an error modal.
fn render_listing(
    document: &Document,
    generation: u32,
    title: &str,
    resp: Result<ApiResponse, JsValue>,
    build: impl FnOnce(&str) -> Result<String, String>,
) {
    if !state::is_current_table_generation(generation) {
        return;
    }

    let shown = match resp {
        Ok(resp) if resp.status == 403 => {
            modal::show(document, "Access Denied", PERMISSION_DENIED_BODY)
        }
        Ok(resp) => match serde_json::from_str::<MaybeError>(&resp.body) {
            Ok(MaybeError { error: Some(message) }) => {
                modal::show(document, "Error", &paragraph(&message))
            }
            _ => match build(&resp.body) {
                Ok(table) => modal::show(document, title, &table),
                Err(e) => modal::show(document, "Error", &paragraph(&e)),
            },
        },
        Err(e) => modal::show(document, "Error", &paragraph(&format!("{:?}", e))),
    };

    if let Err(e) = shown {
        web_sys::console::error_1(&format!("Failed to render {}: {:?}", title, e).into());
    }
}

fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}

/// Access-log table, one row per entry in backend order. Timestamps render
/// as locale date-time strings.
pub fn build_access_log_table(entries: &[AccessLogEntry]) -> String {
    let mut html = String::from(
        "<table><thead><tr><th>Soldier ID</th><th>Name</th><th>Timestamp</th>\
         <th>Status</th><th>Area</th></tr></thead><tbody>",
    );
    for entry in entries {
        html.push_str("<tr>");
        push_cell(&mut html, &entry.soldier_id);
        push_cell(&mut html, &entry.name);
        push_cell(&mut html, &locale_string_from_iso(&entry.timestamp));
        push_cell(&mut html, &entry.status);
        push_cell(&mut html, &entry.area);
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// Personnel roster table, one row per soldier id.
pub fn build_personnel_table(personnel: &BTreeMap<String, PersonnelRecord>) -> String {
    let mut html = String::from(
        "<table><thead><tr><th>Soldier ID</th><th>Name</th><th>Rank</th>\
         <th>Unit</th><th>Clearance</th></tr></thead><tbody>",
    );
    for (soldier_id, record) in personnel {
        html.push_str("<tr>");
        push_cell(&mut html, soldier_id);
        push_cell(&mut html, &record.name);
        push_cell(&mut html, &record.rank);
        push_cell(&mut html, &record.unit);
        push_cell(&mut html, &record.clearance_level);
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn push_cell(html: &mut String, value: &str) {
    html.push_str("<td>");
    html.push_str(&escape_html(value));
    html.push_str("</td>");
}
