//! REST client for the access-control backend.
//!
//! One method per endpoint, all funneling through a single fetch helper.
//! The helper hands back the HTTP status alongside the body text because
//! several endpoint contracts branch on specific codes (401 on the profile,
//! 403 on the admin listings) rather than treating any non-2xx as failure.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::api_base_url;
use crate::constants::{
    ACCESS_LOG_ENDPOINT, ALL_PERSONNEL_ENDPOINT, CHECK_SESSION_ENDPOINT, LOGOUT_ENDPOINT,
    PROFILE_ENDPOINT, REQUEST_ACCESS_ENDPOINT,
};
use crate::models::SessionStatus;

/// Raw fetch result: HTTP status plus body text. Transport failures stay
/// `Err`; status codes are the caller's business.
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

pub struct ApiClient;

impl ApiClient {
    /// Ask the backend whether a session is live (`/api/check-session`).
    pub async fn check_session() -> Result<SessionStatus, JsValue> {
        let url = format!("{}{}", api_base_url(), CHECK_SESSION_ENDPOINT);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&url, &opts)?;
        let window = web_sys::window().expect("no global window exists");
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let json_value = JsFuture::from(resp.json()?).await?;
        serde_wasm_bindgen::from_value(json_value)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse session status: {:?}", e)))
    }

    pub async fn get_profile() -> Result<ApiResponse, JsValue> {
        Self::fetch(PROFILE_ENDPOINT, "GET", None).await
    }

    pub async fn request_access(area: &str) -> Result<ApiResponse, JsValue> {
        let payload = serde_json::json!({ "area": area }).to_string();
        Self::fetch(REQUEST_ACCESS_ENDPOINT, "POST", Some(&payload)).await
    }

    pub async fn get_access_log() -> Result<ApiResponse, JsValue> {
        Self::fetch(ACCESS_LOG_ENDPOINT, "GET", None).await
    }

    pub async fn get_all_personnel() -> Result<ApiResponse, JsValue> {
        Self::fetch(ALL_PERSONNEL_ENDPOINT, "GET", None).await
    }

    pub async fn logout() -> Result<ApiResponse, JsValue> {
        Self::fetch(LOGOUT_ENDPOINT, "POST", None).await
    }

    // Helper function to make fetch requests
    async fn fetch(path: &str, method: &str, body: Option<&str>) -> Result<ApiResponse, JsValue> {
        let url = format!("{}{}", api_base_url(), path);

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        if let Some(data) = body {
            headers.append("Content-Type", "application/json")?;
            opts.set_body(&JsValue::from_str(data));
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(&url, &opts)?;

        let window = web_sys::window().expect("no global window exists");
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let status = resp.status();
        let text = JsFuture::from(resp.text()?).await?;

        Ok(ApiResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
