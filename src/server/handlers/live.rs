//! The aggregated live-score route, backed by the 60-second cache slot.

use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use std::time::Duration;
use tracing::debug;

use crate::constants::{cache_keys, cache_ttl};
use crate::data_fetcher::api::fetch_live_aggregate;
use crate::server::responses::error_response;
use crate::server::state::AppState;

/// GET /api/live
///
/// Serves the cached aggregate verbatim while it is fresh; otherwise runs
/// the three-way upstream fan-out and overwrites the slot. Two requests
/// racing on a stale slot may both refetch; the second write wins.
pub async fn live_scores(state: Data<AppState>) -> impl Responder {
    if let Some(cached) = state.cache.get(cache_keys::LIVE_SCORES).await {
        debug!("Serving live scores from cache");
        return HttpResponse::Ok().json(cached);
    }

    match fetch_live_aggregate(&state.client, &state.config).await {
        Ok(payload) => {
            state
                .cache
                .set(
                    cache_keys::LIVE_SCORES,
                    payload.clone(),
                    Duration::from_secs(cache_ttl::LIVE_SCORES_SECONDS),
                )
                .await;
            HttpResponse::Ok().json(payload)
        }
        Err(e) => error_response(&e),
    }
}
