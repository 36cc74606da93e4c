//! Fetch helpers for the static JSON resources
//!
//! The data files are served from the same origin as the application, so
//! paths are used as-is (`/events.json`, `/categories.json`).

use contracts::shared::errors::LoadError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Event list resource
pub const EVENTS_PATH: &str = "/events.json";

/// Category list resource
pub const CATEGORIES_PATH: &str = "/categories.json";

/// GET a JSON document and deserialize it
///
/// # Errors
/// - `LoadError::Network` when the request could not be sent
/// - `LoadError::Http` for any non-2xx status
/// - `LoadError::Parse` when the body does not match `T`
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, LoadError> {
    let response = Request::get(path)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Http(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| LoadError::Parse(e.to_string()))
}
