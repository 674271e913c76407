//! Stubbed API boundary.
//!
//! No backend exists yet: the room and inventory endpoints answer only
//! once a server is wired in, and the booking endpoints are still
//! placeholder constants. Callers treat every failure as "leave the form
//! open and let the user resubmit".

use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub const ROOMS_ADD: &str = "/api/rooms/add";
pub const ROOMS_UPDATE: &str = "/api/rooms/update";
pub const INVENTORY_ADD: &str = "/api/inventory/add";
pub const INVENTORY_UPDATE: &str = "/api/inventory/update";

// Booking endpoints are not decided yet; these stay placeholders until
// the backend lands.
pub const ADD_BOOKING_ENDPOINT: &str = "ADD_BOOKING_API_ENDPOINT_HERE";
pub const UPDATE_BOOKING_ENDPOINT: &str = "UPDATE_BOOKING_API_ENDPOINT_HERE/:id";

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location, using
/// port 3000 for the backend server. Empty string if window is not
/// available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn send_json<T: Serialize>(method: &str, path: &str, body: &T) -> Result<(), String> {
    let payload = serde_json::to_string(body).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&payload));

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

/// POST a JSON body to a stubbed endpoint.
pub async fn post_json<T: Serialize>(path: &str, body: &T) -> Result<(), String> {
    send_json("POST", path, body).await
}

/// PUT a JSON body to a stubbed endpoint.
pub async fn put_json<T: Serialize>(path: &str, body: &T) -> Result<(), String> {
    send_json("PUT", path, body).await
}
