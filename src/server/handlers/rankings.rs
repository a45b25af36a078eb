//! Team rankings. The route serves the raw entries; men/women/format
//! grouping happens client-side with the ranking-grouping helper.

use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::data_fetcher::api::cricket_api::fetch_team_rankings;
use crate::server::responses::error_response;
use crate::server::state::AppState;

/// GET /api/team-rankings
pub async fn team_rankings(state: Data<AppState>) -> impl Responder {
    match fetch_team_rankings(&state.client, &state.config).await {
        Ok(entries) => HttpResponse::Ok().json(json!({ "data": entries })),
        Err(e) => error_response(&e),
    }
}
