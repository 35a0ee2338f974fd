//! Correction Service Client
//!
//! Frontend binding to the server endpoint that merges selected
//! corrections into the resume text.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::ApplyError;
use crate::models::{ApplyRequest, ApplyResponse};

/// POST the selected corrections and return the corrected text
pub async fn apply_corrections(endpoint: &str, request: &ApplyRequest) -> Result<String, ApplyError> {
    let body = serde_json::to_string(request).map_err(|e| ApplyError::Transport(e.to_string()))?;

    let headers = Headers::new().map_err(js_error)?;
    headers.set("Content-Type", "application/json").map_err(js_error)?;
    headers.set("Accept", "application/json").map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let http_request = Request::new_with_str_and_init(endpoint, &init).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| ApplyError::Transport("no window".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&http_request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| ApplyError::Malformed("fetch did not yield a Response".to_string()))?;

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    parse_apply_response(response.status(), &text)
}

/// Interpret status and body; anything but a 2xx JSON body with
/// `corrected_text` is a failure
pub fn parse_apply_response(status: u16, body: &str) -> Result<String, ApplyError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApplyResponse>(body)
            .ok()
            .and_then(|parsed| parsed.error);
        return Err(ApplyError::Status { status, message });
    }

    let parsed: ApplyResponse =
        serde_json::from_str(body).map_err(|e| ApplyError::Malformed(e.to_string()))?;
    parsed.corrected_text.ok_or(ApplyError::MissingCorrectedText)
}

fn js_error(err: JsValue) -> ApplyError {
    ApplyError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
