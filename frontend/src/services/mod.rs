//! Typed wrappers over the remote car-market API.
//!
//! Each function issues one HTTP request through `gloo_net` and reports the
//! outcome as a `common::error::ApiError`. Nothing here retries, caches or
//! notifies; the calling view decides how a failure is shown.

pub mod cars;
pub mod payments;

use common::error::ApiError;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

fn transport(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

fn browser_failure(value: JsValue) -> ApiError {
    ApiError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("browser error: {:?}", value)),
    )
}

/// Passes 2xx responses through and turns everything else into an error
/// carrying the server's message.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Encodes a free-text value for use inside a path segment.
fn encode_segment(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}
