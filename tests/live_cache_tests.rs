//! Route-level tests for the live-score cache slot: fresh entries are served
//! verbatim without touching upstream, stale entries are ignored and trigger
//! a new three-way fan-out.

use actix_web::web::Data;
use actix_web::{App, test};
use cricscore::config::Config;
use cricscore::server::{AppState, configure_routes};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(provider_base: &str) -> Config {
    Config {
        provider_base: provider_base.to_string(),
        provider_token: Some("test-token".to_string()),
        ..Config::default()
    }
}

async fn mount_live_upstream(server: &MockServer, fixture_id: i64, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path("/livescores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": fixture_id,
                "starting_at": "2026-08-07T10:00:00.000000Z",
                "status": "LIVE",
                "localteam_id": 36,
                "visitorteam_id": 38
            }]
        })))
        .expect(expected_hits)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(expected_hits * 2)
        .mount(server)
        .await;
}

#[actix_web::test]
async fn two_requests_within_window_hit_upstream_once() {
    let server = MockServer::start().await;
    // One fan-out total: 1 livescores call + 2 fixtures-window calls
    mount_live_upstream(&server, 1, 1).await;

    let state = Data::new(AppState::new(test_config(&server.uri())).unwrap());
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(configure_routes)).await;

    let first: serde_json::Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/live").to_request())
            .await;
    let second: serde_json::Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/live").to_request())
            .await;

    // Byte-identical payloads within the freshness window
    assert_eq!(first, second);
    assert_eq!(first["live"][0]["id"], 1);
    server.verify().await;
}

#[actix_web::test]
async fn stale_entry_is_ignored_and_refetched() {
    let server = MockServer::start().await;
    mount_live_upstream(&server, 2, 1).await;

    let state = Data::new(AppState::new(test_config(&server.uri())).unwrap());
    // Seed the slot with an already-stale payload: the next request must
    // treat it as COLD and run the fan-out
    state
        .cache
        .set("live_scores", json!({"live": "stale"}), Duration::from_secs(0))
        .await;

    let app =
        test::init_service(App::new().app_data(state.clone()).configure(configure_routes)).await;
    let body: serde_json::Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/live").to_request())
            .await;

    assert_ne!(body["live"], json!("stale"));
    assert_eq!(body["live"][0]["id"], 2);
    server.verify().await;

    // The refetch overwrote the slot; a follow-up request is served fresh
    // from cache (upstream expectations above would fail on a second hit)
    let again: serde_json::Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/live").to_request())
            .await;
    assert_eq!(again, body);
}

#[actix_web::test]
async fn upstream_failure_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/livescores"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let state = Data::new(AppState::new(test_config(&server.uri())).unwrap());
    let app =
        test::init_service(App::new().app_data(state.clone()).configure(configure_routes)).await;

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/api/live").to_request()).await;
    assert_eq!(response.status(), 502);
    // The slot stays empty after a failed aggregation
    assert!(state.cache.get("live_scores").await.is_none());
}
