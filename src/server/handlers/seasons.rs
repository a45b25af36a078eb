//! Season-scoped aggregates. Standings, teams and venues soft-fail to keep
//! season pages rendering; stats hard-fails because its page is unusable
//! without the data anyway.

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use tracing::warn;

use crate::data_fetcher::api::cricket_api::{fetch_season_resource, fetch_season_teams};
use crate::data_fetcher::processors::map_team;
use crate::server::responses::{error_response, parse_id, soft_empty};
use crate::server::state::AppState;

async fn season_passthrough(
    state: &AppState,
    path: &str,
    resource: &'static str,
    soft_fail: bool,
) -> HttpResponse {
    let season_id = match parse_id(path, "season id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    match fetch_season_resource(&state.client, &state.config, resource, season_id).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) if soft_fail && !e.is_rate_limited() => {
            warn!("Soft-failing season {resource} for season {season_id}: {e}");
            soft_empty(&format!("Unable to load {resource} for this season"))
        }
        Err(e) => error_response(&e),
    }
}

/// GET /api/seasons/{id}/standings
pub async fn season_standings(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    season_passthrough(&state, &path, "standings", true).await
}

/// GET /api/seasons/{id}/stats
pub async fn season_stats(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    season_passthrough(&state, &path, "stats", false).await
}

/// GET /api/seasons/{id}/venues
pub async fn season_venues(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    season_passthrough(&state, &path, "venues", true).await
}

/// GET /api/seasons/{id}/teams
pub async fn season_teams(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let season_id = match parse_id(&path, "season id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    match fetch_season_teams(&state.client, &state.config, season_id).await {
        Ok(rows) => {
            let teams: Vec<_> = rows
                .iter()
                .filter_map(|team| map_team(Some(team), None))
                .collect();
            HttpResponse::Ok().json(json!({ "data": teams }))
        }
        Err(e) if e.is_rate_limited() => error_response(&e),
        Err(e) => {
            warn!("Soft-failing season teams for season {season_id}: {e}");
            soft_empty("Unable to load teams for this season")
        }
    }
}
