//! Generic HTTP fetching with upstream error mapping.
//!
//! There is deliberately no retry logic here: a failed upstream call fails
//! the request immediately, and the live-score cache is what makes a recent
//! success reusable.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::urls::sanitize_url;
use crate::error::AppError;

/// Phrases in an upstream error body that indicate throttling even when the
/// status is not a bare 429.
const RATE_LIMIT_PHRASES: &[&str] = &["too many attempts", "rate limit"];

/// Generic fetch: issues a GET with `Accept: application/json`, maps non-2xx
/// statuses to the error taxonomy, and parses the body into `T`.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from (token already appended)
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client, url), fields(url = %sanitize_url(url)))]
pub async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    fetch_with_timeout(client, url, None).await
}

/// Same as [`fetch`], with an explicit per-request timeout layered on top of
/// the client default. Only the CMS upcoming-fixtures call uses this.
#[instrument(skip(client, url, timeout), fields(url = %sanitize_url(url)))]
pub async fn fetch_with_timeout<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    timeout: Option<Duration>,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {}", sanitize_url(url));

    let mut request = client.get(url).header(reqwest::header::ACCEPT, "application/json");
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", sanitize_url(url), e);
            return Err(AppError::UpstreamFetch(e));
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        let body = response.text().await.unwrap_or_default();
        let message = extract_upstream_message(&body).unwrap_or_else(|| reason.to_string());

        error!(
            "HTTP {} - {} (URL: {})",
            status_code,
            message,
            sanitize_url(url)
        );

        if status_code == 429 || is_rate_limit_message(&message) {
            return Err(AppError::rate_limited(message, sanitize_url(url)));
        }
        return Err(match status_code {
            404 => AppError::upstream_not_found(sanitize_url(url)),
            _ => AppError::upstream_http(status_code, message, sanitize_url(url)),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!(
                "Failed to read response text from URL {}: {}",
                sanitize_url(url),
                e
            );
            return Err(AppError::UpstreamFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            warn!(
                "Failed to parse upstream response: {} (URL: {})",
                e,
                sanitize_url(url)
            );
            if response_text.trim().is_empty() {
                Err(AppError::upstream_no_data(
                    "Response body is empty",
                    sanitize_url(url),
                ))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::upstream_parse(
                    "Response is not valid JSON",
                    sanitize_url(url),
                ))
            } else {
                Err(AppError::upstream_parse(e.to_string(), sanitize_url(url)))
            }
        }
    }
}

/// Best-effort extraction of a human-readable message from an upstream error
/// body. Providers wrap it differently (`message`, `error`, sometimes
/// nested), so this probes the common spots and falls back to None.
fn extract_upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let candidates = [
        value.get("message"),
        value.get("error").and_then(|e| e.get("message")),
        value.get("error"),
    ];
    for candidate in candidates.into_iter().flatten() {
        if let Some(text) = candidate.as_str() {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

fn is_rate_limit_message(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    RATE_LIMIT_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
