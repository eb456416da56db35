use cozy_map_core::{Spot, SpotEndpoint};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no window available")]
    NoWindow,

    #[error("request failed: {0}")]
    Request(String),

    #[error("server answered {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("failed to parse spots: {0}")]
    Decode(String),
}

/// Fetches a same-origin spot list, sending the session cookie along.
pub async fn fetch_spots(endpoint: SpotEndpoint) -> Result<Vec<Spot>, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_credentials(RequestCredentials::SameOrigin);

    let request = Request::new_with_str_and_init(endpoint.path(), &opts)
        .map_err(|error| FetchError::Request(describe(&error)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| FetchError::Request(describe(&error)))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|error| FetchError::Body(describe(&error)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .json()
        .map_err(|error| FetchError::Body(describe(&error)))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|error| FetchError::Body(describe(&error)))?;

    serde_wasm_bindgen::from_value(json).map_err(|error| FetchError::Decode(error.to_string()))
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(value)
                .ok()
                .and_then(|text| text.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn errors_read_well_in_the_console() {
        assert_eq!(FetchError::Status(502).to_string(), "server answered 502");
        assert_eq!(
            FetchError::Decode("expected a sequence".to_string()).to_string(),
            "failed to parse spots: expected a sequence"
        );
    }
}
