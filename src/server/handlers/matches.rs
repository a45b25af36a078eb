//! Match detail variants. All three routes serve the same fixture; they
//! differ only in the upstream include set.

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;

use super::fixtures::fetch_enriched_fixture;
use crate::data_fetcher::api::cricket_api::fetch_fixture_raw;
use crate::server::responses::{error_response, parse_id};
use crate::server::state::AppState;

const MATCH_DETAIL_INCLUDES: &str = "league,localteam,visitorteam,runs";
const COMMENTARY_INCLUDES: &str = "balls,localteam,visitorteam";

/// GET /api/match/{id}
pub async fn match_detail(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let fixture_id = match parse_id(&path, "match id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    match fetch_fixture_raw(&state.client, &state.config, fixture_id, MATCH_DETAIL_INCLUDES).await
    {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => error_response(&e),
    }
}

/// GET /api/match/{id}/commentary
///
/// Ball-by-ball rows pass through verbatim; the UI renders them directly.
pub async fn match_commentary(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let fixture_id = match parse_id(&path, "match id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    match fetch_fixture_raw(&state.client, &state.config, fixture_id, COMMENTARY_INCLUDES).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => error_response(&e),
    }
}

/// GET /api/match/{id}/scorecard
pub async fn match_scorecard(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let fixture_id = match parse_id(&path, "match id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    match fetch_enriched_fixture(&state, fixture_id).await {
        Ok(payload) => HttpResponse::Ok().json(json!({ "data": payload })),
        Err(e) => error_response(&e),
    }
}
