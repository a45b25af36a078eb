//! League routes: metadata, and season-scoped fixture/team listings that
//! resolve the league's current season first.
//!
//! The listing subroutes soft-fail: an upstream failure yields HTTP 200 with
//! an empty data array so league pages keep rendering. The sibling metadata
//! routes hard-fail. This divergence is a preserved product behavior.

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use tracing::warn;

use crate::constants::messages;
use crate::data_fetcher::api::cricket_api::{
    fetch_league, fetch_leagues, fetch_season_fixtures, fetch_season_teams,
};
use crate::data_fetcher::models::UpstreamLeague;
use crate::data_fetcher::processors::{map_team, normalize_fixtures, resolve_current_season};
use crate::error::AppError;
use crate::server::responses::{error_response, parse_id, soft_empty};
use crate::server::state::AppState;

/// GET /api/leagues
pub async fn leagues_index(state: Data<AppState>) -> impl Responder {
    match fetch_leagues(&state.client, &state.config).await {
        Ok(leagues) => HttpResponse::Ok().json(json!({ "data": leagues })),
        Err(e) => error_response(&e),
    }
}

/// GET /api/leagues/{id}
pub async fn league_detail(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let league_id = match parse_id(&path, "league id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    match fetch_league(&state.client, &state.config, league_id).await {
        Ok(league) => HttpResponse::Ok().json(json!({ "data": league })),
        Err(e) => error_response(&e),
    }
}

/// Resolves the league's current season id, distinguishing "league has no
/// seasons" (the soft NO_SEASONS answer) from upstream failure.
async fn current_season_id(
    state: &AppState,
    league_id: i64,
) -> Result<Option<i64>, AppError> {
    let league: UpstreamLeague = fetch_league(&state.client, &state.config, league_id).await?;
    let seasons = league.seasons.unwrap_or_default();
    Ok(resolve_current_season(&seasons).and_then(|season| season.id))
}

/// GET /api/leagues/{id}/fixtures
pub async fn league_fixtures(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let league_id = match parse_id(&path, "league id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    let season_id = match current_season_id(&state, league_id).await {
        Ok(Some(id)) => id,
        Ok(None) => return soft_empty(messages::NO_SEASONS),
        Err(e) if e.is_rate_limited() => return error_response(&e),
        Err(e) => {
            warn!("Soft-failing league fixtures for league {league_id}: {e}");
            return soft_empty("Unable to load fixtures for this league");
        }
    };

    match fetch_season_fixtures(&state.client, &state.config, season_id).await {
        Ok(rows) => {
            let mut fixtures = normalize_fixtures(&rows);
            fixtures.sort_by(|a, b| a.starting_at.cmp(&b.starting_at));
            HttpResponse::Ok().json(json!({ "data": fixtures, "success": true }))
        }
        Err(e) if e.is_rate_limited() => error_response(&e),
        Err(e) => {
            warn!("Soft-failing league fixtures for season {season_id}: {e}");
            soft_empty("Unable to load fixtures for this league")
        }
    }
}

/// GET /api/leagues/{id}/teams
pub async fn league_teams(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let league_id = match parse_id(&path, "league id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    let season_id = match current_season_id(&state, league_id).await {
        Ok(Some(id)) => id,
        Ok(None) => return soft_empty(messages::NO_SEASONS),
        Err(e) if e.is_rate_limited() => return error_response(&e),
        Err(e) => {
            warn!("Soft-failing league teams for league {league_id}: {e}");
            return soft_empty("Unable to load teams for this league");
        }
    };

    match fetch_season_teams(&state.client, &state.config, season_id).await {
        Ok(rows) => {
            let teams: Vec<_> = rows
                .iter()
                .filter_map(|team| map_team(Some(team), None))
                .collect();
            HttpResponse::Ok().json(json!({ "data": teams, "success": true }))
        }
        Err(e) if e.is_rate_limited() => error_response(&e),
        Err(e) => {
            warn!("Soft-failing league teams for season {season_id}: {e}");
            soft_empty("Unable to load teams for this league")
        }
    }
}
