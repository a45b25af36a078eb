//! Countries listing, cached for a day.

use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::time::Duration;

use crate::constants::{cache_keys, cache_ttl};
use crate::data_fetcher::api::cricket_api::fetch_countries;
use crate::server::responses::error_response;
use crate::server::state::AppState;

/// GET /api/countries
pub async fn countries_index(state: Data<AppState>) -> impl Responder {
    if let Some(cached) = state.cache.get(cache_keys::COUNTRIES).await {
        return HttpResponse::Ok().json(cached);
    }

    match fetch_countries(&state.client, &state.config).await {
        Ok(countries) => {
            let payload = json!({ "data": countries });
            state
                .cache
                .set(
                    cache_keys::COUNTRIES,
                    payload.clone(),
                    Duration::from_secs(cache_ttl::COUNTRIES_SECONDS),
                )
                .await;
            HttpResponse::Ok().json(payload)
        }
        Err(e) => error_response(&e),
    }
}
