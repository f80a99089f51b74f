//! Remote API Bindings
//!
//! Async wrappers around the browser `fetch` for the character API.

mod character;

use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{FetchError, FetchResult};

// Re-export all public items
pub use character::*;

/// GET `url` and return the body as text.
///
/// A rejected promise or a non-2xx response is an error; there is no retry.
pub async fn fetch_text(url: &str) -> FetchResult<String> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network {
        url: url.to_string(),
        message: "no global window".to_string(),
    })?;

    let promise: Promise = window.fetch_with_str(url);
    let response: Response = JsFuture::from(promise)
        .await
        .and_then(|value| value.dyn_into::<Response>())
        .map_err(|e| FetchError::Network { url: url.to_string(), message: js_message(&e) })?;

    if !response.ok() {
        return Err(FetchError::Status { url: url.to_string(), status: response.status() });
    }

    let body_error = |e: JsValue| FetchError::Body { url: url.to_string(), message: js_message(&e) };
    let text = JsFuture::from(response.text().map_err(body_error)?)
        .await
        .map_err(body_error)?;

    text.as_string().ok_or_else(|| FetchError::Body {
        url: url.to_string(),
        message: "body is not a string".to_string(),
    })
}

fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
