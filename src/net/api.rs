//! Same-site fetch helpers.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with [`FetchError::Network`] since there
//! is no browser to fetch from.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status is an error, so callers never splice an error page
//! into the document. There is no retry and no timeout; a hung request
//! simply never resolves.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::FetchError;
use crate::net::types::{Project, parse_projects};

#[cfg(any(test, feature = "csr"))]
fn check_status(url: &str, status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status { url: url.to_owned(), status })
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable(url: &str) -> FetchError {
    FetchError::Network { url: url.to_owned(), message: "not available outside the browser".to_owned() }
}

/// GET `url` and return the body as text.
///
/// # Errors
///
/// Network failure, non-success status, or unreadable body.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network { url: url.to_owned(), message: e.to_string() })?;
        check_status(url, resp.status())?;
        resp.text()
            .await
            .map_err(|e| FetchError::Decode { url: url.to_owned(), message: e.to_string() })
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable(url))
    }
}

/// GET and parse the project collection at `url`.
///
/// # Errors
///
/// Any [`fetch_text`] error, or [`FetchError::Decode`] when the body is not
/// a project array.
pub async fn fetch_projects(url: &str) -> Result<Vec<Project>, FetchError> {
    let raw = fetch_text(url).await?;
    parse_projects(&raw).map_err(|e| FetchError::Decode { url: url.to_owned(), message: e.to_string() })
}

/// Header-only existence probe.
///
/// # Errors
///
/// Network failure or non-success status.
pub async fn probe(url: &str) -> Result<(), FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::RequestBuilder::new(url)
            .method(gloo_net::http::Method::HEAD)
            .send()
            .await
            .map_err(|e| FetchError::Network { url: url.to_owned(), message: e.to_string() })?;
        check_status(url, resp.status())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable(url))
    }
}

/// Try `candidates` in order and return the first successful body with the
/// URL it came from.
pub async fn fetch_first_text<S: AsRef<str>>(candidates: &[S]) -> Option<(String, String)> {
    for candidate in candidates {
        let url = candidate.as_ref();
        match fetch_text(url).await {
            Ok(body) => return Some((url.to_owned(), body)),
            Err(e) => log::debug!("{e}; trying next candidate"),
        }
    }
    None
}
