//! Fetchers for the CMS backend: news content, finished-match archives and
//! the curated upcoming-fixtures feed.

use reqwest::Client;
use std::time::Duration;

use super::fetch_utils::{fetch, fetch_with_timeout};
use super::urls::build_resource_url;
use crate::config::Config;
use crate::constants::timeouts;
use crate::data_fetcher::models::{CmsFixtureRow, DataEnvelope};
use crate::error::AppError;

fn cms_url(config: &Config, path: &str, params: &[(&str, &str)]) -> Result<String, AppError> {
    let token = config.cms_token()?;
    Ok(build_resource_url(&config.cms_base, path, &token, params))
}

/// The curated upcoming feed: `{ sportmonks_id, payload }` rows wrapping raw
/// provider fixtures. This is the only upstream call with its own timeout;
/// the UI blocks its landing page on it.
pub async fn fetch_cms_upcoming(
    client: &Client,
    config: &Config,
) -> Result<Vec<CmsFixtureRow>, AppError> {
    let url = cms_url(config, "fixtures/upcoming", &[])?;
    let envelope: DataEnvelope<Vec<CmsFixtureRow>> = fetch_with_timeout(
        client,
        &url,
        Some(Duration::from_secs(timeouts::CMS_UPCOMING_SECONDS)),
    )
    .await?;
    Ok(envelope.data)
}

/// News listing, forwarded verbatim with whatever parameters the caller
/// whitelisted.
pub async fn fetch_news(
    client: &Client,
    config: &Config,
    params: &[(&str, &str)],
) -> Result<serde_json::Value, AppError> {
    let url = cms_url(config, "news", params)?;
    fetch(client, &url).await
}

pub async fn fetch_news_categories(
    client: &Client,
    config: &Config,
) -> Result<serde_json::Value, AppError> {
    let url = cms_url(config, "news/categories", &[])?;
    fetch(client, &url).await
}

/// Sitemap feed for news articles, consumed by the crawler endpoint.
pub async fn fetch_news_sitemap(
    client: &Client,
    config: &Config,
) -> Result<serde_json::Value, AppError> {
    let url = cms_url(config, "news/sitemap", &[])?;
    fetch(client, &url).await
}

/// Finished-match archives, pre-aggregated and paginated upstream. Query
/// parameters and the pagination envelope pass through untouched.
pub async fn fetch_archives(
    client: &Client,
    config: &Config,
    params: &[(&str, &str)],
) -> Result<serde_json::Value, AppError> {
    let url = cms_url(config, "archives", params)?;
    fetch(client, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::env_vars;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serial_test::serial;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base: &str) -> Config {
        Config {
            cms_base: base.to_string(),
            cms_token: Some("cms-token".to_string()),
            ..Config::default()
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_cms_upcoming_unwraps_envelope() {
        unsafe {
            std::env::remove_var(env_vars::CMS_TOKEN);
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fixtures/upcoming"))
            .and(query_param("api_token", "cms-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {
                        "sportmonks_id": 50001,
                        "payload": {"id": 50001, "starting_at": "2026-08-10T09:30:00.000000Z"}
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let rows = fetch_cms_upcoming(&client, &test_config(&server.uri()))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sportmonks_id, 50001);
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_cms_token_names_variable() {
        unsafe {
            std::env::remove_var(env_vars::CMS_TOKEN);
        }
        let config = Config {
            cms_base: "https://unreachable.invalid".to_string(),
            cms_token: None,
            ..Config::default()
        };
        let client = create_test_http_client();
        let err = fetch_news_categories(&client, &config).await.unwrap_err();
        assert!(matches!(err, AppError::MissingToken(v) if v == env_vars::CMS_TOKEN));
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_archives_forwards_params() {
        unsafe {
            std::env::remove_var(env_vars::CMS_TOKEN);
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/archives"))
            .and(query_param("page", "3"))
            .and(query_param("format", "odi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [],
                "meta": {"current_page": 3}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let value = fetch_archives(
            &client,
            &test_config(&server.uri()),
            &[("page", "3"), ("format", "odi")],
        )
        .await
        .unwrap();
        assert_eq!(value["meta"]["current_page"], 3);
    }
}
