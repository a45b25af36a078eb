//! URL building utilities for the upstream APIs.
//!
//! Resource paths never embed the API token themselves; the token is
//! appended here as a query parameter, and [`sanitize_url`] strips it back
//! out of anything destined for a log line.

/// Builds an absolute resource URL against an upstream base, appending the
/// API token and any extra query parameters.
///
/// # Example
/// ```
/// use cricscore::data_fetcher::api::build_resource_url;
///
/// let url = build_resource_url(
///     "https://api.example.com/v2",
///     "fixtures",
///     "secret",
///     &[("include", "localteam,visitorteam")],
/// );
/// assert_eq!(
///     url,
///     "https://api.example.com/v2/fixtures?api_token=secret&include=localteam,visitorteam"
/// );
/// ```
pub fn build_resource_url(
    base: &str,
    path: &str,
    token: &str,
    params: &[(&str, &str)],
) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let mut url = format!("{base}/{path}?api_token={token}");
    for (key, value) in params {
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }
    url
}

/// Redacts the API token from a URL so it never reaches the logs.
///
/// # Example
/// ```
/// use cricscore::data_fetcher::api::sanitize_url;
///
/// let sanitized = sanitize_url("https://api.example.com/fixtures?api_token=secret&page=2");
/// assert_eq!(sanitized, "https://api.example.com/fixtures?api_token=***&page=2");
/// ```
pub fn sanitize_url(url: &str) -> String {
    match url.find("api_token=") {
        Some(start) => {
            let value_start = start + "api_token=".len();
            let value_end = url[value_start..]
                .find('&')
                .map_or(url.len(), |offset| value_start + offset);
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}
