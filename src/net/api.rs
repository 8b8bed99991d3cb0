//! HTTP helpers for the bookstore REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the API is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>` where the error is the
//! server-provided `{"message": ...}` body when present, else the
//! caller's fallback text. Expected failures never panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base path of the catalog API. The host page proxies this to the
/// configured backend.
pub const API_BASE: &str = "/api";

/// Absolute request path for an API endpoint path like `/books/7`.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract the server error message from a response body, falling back
/// to `fallback` when the body is absent, non-JSON, or has no message.
pub(crate) fn extract_error_message(body: &str, fallback: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(feature = "hydrate")]
fn with_auth(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(t) => builder.header("Authorization", &bearer(t)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn error_from(resp: gloo_net::http::Response, fallback: &str) -> String {
    let body = resp.text().await.unwrap_or_default();
    extract_error_message(&body, fallback)
}

/// GET a JSON value.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    fallback: &str,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&api_url(path)), token)
            .send()
            .await
            .map_err(|_| fallback.to_owned())?;
        if !resp.ok() {
            return Err(error_from(resp, fallback).await);
        }
        resp.json::<T>().await.map_err(|_| fallback.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, fallback);
        Err("not available on server".to_owned())
    }
}

/// GET a binary body with an explicit `Accept` header.
pub async fn get_bytes(
    path: &str,
    token: Option<&str>,
    accept: &str,
    fallback: &str,
) -> Result<Vec<u8>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&api_url(path)), token)
            .header("Accept", accept)
            .send()
            .await
            .map_err(|_| fallback.to_owned())?;
        if !resp.ok() {
            return Err(error_from(resp, fallback).await);
        }
        resp.binary().await.map_err(|_| fallback.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, accept, fallback);
        Err("not available on server".to_owned())
    }
}

/// POST a JSON body and decode a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
    fallback: &str,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(&api_url(path)), token)
            .json(body)
            .map_err(|_| fallback.to_owned())?
            .send()
            .await
            .map_err(|_| fallback.to_owned())?;
        if !resp.ok() {
            return Err(error_from(resp, fallback).await);
        }
        resp.json::<T>().await.map_err(|_| fallback.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body, fallback);
        Err("not available on server".to_owned())
    }
}

/// POST with an empty body, ignoring any response payload.
pub async fn post_empty(path: &str, token: Option<&str>, fallback: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(&api_url(path)), token)
            .send()
            .await
            .map_err(|_| fallback.to_owned())?;
        if !resp.ok() {
            return Err(error_from(resp, fallback).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, fallback);
        Err("not available on server".to_owned())
    }
}

/// PUT a JSON body and decode a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
    fallback: &str,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::put(&api_url(path)), token)
            .json(body)
            .map_err(|_| fallback.to_owned())?
            .send()
            .await
            .map_err(|_| fallback.to_owned())?;
        if !resp.ok() {
            return Err(error_from(resp, fallback).await);
        }
        resp.json::<T>().await.map_err(|_| fallback.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body, fallback);
        Err("not available on server".to_owned())
    }
}

/// DELETE a resource, expecting no response body.
pub async fn delete(path: &str, token: Option<&str>, fallback: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::delete(&api_url(path)), token)
            .send()
            .await
            .map_err(|_| fallback.to_owned())?;
        if !resp.ok() {
            return Err(error_from(resp, fallback).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, fallback);
        Err("not available on server".to_owned())
    }
}
