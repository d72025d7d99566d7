//! Gemini API transport (browser fetch)
//!
//! Issues exactly one schema-constrained request per analysis and maps
//! the outcome onto the shared error taxonomy: no text -> EmptyResponse,
//! bad JSON -> Parse, anything transport-shaped -> Api.

use agriscan_common::{
    extract_base64_from_data_url, extract_mime_type_from_data_url, generate_content_url,
    parse_analysis_response, AgriScanError, AnalysisResult, GenerateContentRequest,
    GenerateContentResponse, Result, DEFAULT_MODEL,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Analyze one plant photo given as a FileReader data URL
pub async fn analyze_plant_image(api_key: &str, data_url: &str) -> Result<AnalysisResult> {
    // accept a bare base64 payload as well as a full data URL
    let base64_data = extract_base64_from_data_url(data_url).unwrap_or(data_url);
    let mime_type = extract_mime_type_from_data_url(data_url);

    let request = GenerateContentRequest::for_image(base64_data, mime_type);
    let response_text = call_gemini_api(api_key, &request).await?;

    parse_analysis_response(&response_text)
}

async fn call_gemini_api(api_key: &str, request: &GenerateContentRequest) -> Result<String> {
    let url = format!("{}?key={}", generate_content_url(DEFAULT_MODEL), api_key);
    let body = serde_json::to_string(request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(api_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(api_error)?;

    let window = web_sys::window().ok_or_else(|| AgriScanError::Api("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(api_error)?;
    let resp: Response = resp_value.dyn_into().map_err(api_error)?;

    if !resp.ok() {
        return Err(AgriScanError::Api(format!("HTTP {}", resp.status())));
    }

    let json = JsFuture::from(resp.json().map_err(api_error)?)
        .await
        .map_err(api_error)?;
    let response: GenerateContentResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| AgriScanError::Parse(e.to_string()))?;

    response
        .text()
        .map(str::to_string)
        .ok_or(AgriScanError::EmptyResponse)
}

fn api_error(e: JsValue) -> AgriScanError {
    AgriScanError::Api(format!("{:?}", e))
}
