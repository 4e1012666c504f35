//! REST API Client
//!
//! Thin wrappers over the backend endpoints, organized by domain.
//! State-changing requests echo the CSRF cookie in a header; the browser
//! carries the session cookie itself. No client-side timeouts.

mod activities;
mod auth;
mod item_types;
mod items;
mod settings;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsCast;

// Re-export all public items
pub use activities::*;
pub use auth::*;
pub use item_types::*;
pub use items::*;
pub use settings::*;

const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

/// Everything an endpoint call can fail with
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("not logged in")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Log a failed call to the browser console
pub fn log_error(what: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("[API] {} failed: {}", what, err).into());
}

/// Compile-time override for the API origin; same-origin by default
fn base_url() -> String {
    match option_env!("SHELFMARK_API_BASE") {
        Some(base) if !base.is_empty() => base.trim_end_matches('/').to_string(),
        _ => web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default(),
    }
}

/// Percent-encode a slug or token for use as a path segment
pub(crate) fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

/// CSRF token from the named cookie, if present
fn csrf_token() -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    cookies.split(';').find_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        (name == CSRF_COOKIE).then(|| value.to_string())
    })
}

fn request(method: Method, path: &str) -> RequestBuilder {
    let url = format!("{}{}", base_url(), path);
    let builder = reqwest::Client::new().request(method.clone(), url);
    // Echo the CSRF cookie on anything state-changing
    if method != Method::GET {
        if let Some(token) = csrf_token() {
            return builder.header(CSRF_HEADER, token);
        }
    }
    builder
}

async fn check(resp: Response) -> ApiResult<Response> {
    match resp.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
        status if !status.is_success() => Err(ApiError::Status(status.as_u16())),
        _ => Ok(resp),
    }
}

async fn send(builder: RequestBuilder) -> ApiResult<Response> {
    let resp = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(resp).await
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    decode(send(request(Method::GET, path)).await?).await
}

pub(crate) async fn post_json<T: DeserializeOwned>(
    path: &str,
    body: &impl Serialize,
) -> ApiResult<T> {
    decode(send(request(Method::POST, path).json(body)).await?).await
}

pub(crate) async fn patch_json<T: DeserializeOwned>(
    path: &str,
    body: &impl Serialize,
) -> ApiResult<T> {
    decode(send(request(Method::PATCH, path).json(body)).await?).await
}

pub(crate) async fn delete(path: &str) -> ApiResult<()> {
    send(request(Method::DELETE, path)).await?;
    Ok(())
}

pub(crate) async fn post_empty(path: &str, body: &impl Serialize) -> ApiResult<()> {
    send(request(Method::POST, path).json(body)).await?;
    Ok(())
}

pub(crate) async fn get_empty(path: &str) -> ApiResult<()> {
    send(request(Method::GET, path)).await?;
    Ok(())
}

pub(crate) async fn post_multipart(path: &str, form: reqwest::multipart::Form) -> ApiResult<()> {
    send(request(Method::POST, path).multipart(form)).await?;
    Ok(())
}
