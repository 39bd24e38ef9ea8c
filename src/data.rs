use crate::constants::INLINE_SPOTS_GLOBAL;
use crate::core::{parse_spots_json, spots_from_values, Spot, SpotsError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Read the page-provided spot array, if the page set one.
/// A value that is not an array counts as absent; bad entries are dropped
/// and bad fields blanked as for fetched data.
pub fn inline_spots(window: &web::Window) -> Option<Vec<Spot>> {
    let value = js_sys::Reflect::get(window, &INLINE_SPOTS_GLOBAL.into()).ok()?;
    if !js_sys::Array::is_array(&value) {
        return None;
    }
    match serde_wasm_bindgen::from_value::<Vec<serde_json::Value>>(value) {
        Ok(items) => Some(spots_from_values(items)),
        Err(e) => {
            log::warn!("[spots] ignoring malformed {}: {}", INLINE_SPOTS_GLOBAL, e);
            None
        }
    }
}

/// GET `url` and parse the body as a spot array.
pub async fn fetch_spots(url: String) -> Result<Vec<Spot>, SpotsError> {
    let window = web::window().ok_or_else(|| SpotsError::Network("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| SpotsError::Network(format!("{:?}", e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| SpotsError::Network("response is not a Response".into()))?;
    if !resp.ok() {
        return Err(SpotsError::Status(resp.status()));
    }
    let text_promise = resp
        .text()
        .map_err(|e| SpotsError::Network(format!("{:?}", e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| SpotsError::Network(format!("{:?}", e)))?
        .as_string()
        .unwrap_or_default();
    parse_spots_json(&text)
}
