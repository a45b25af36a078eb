//! Fixture routes: single-fixture detail with scorecard hydration, the CMS
//! curated upcoming feed, and the plain upcoming/recent windows.

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::data_fetcher::api::cricket_api::{
    fetch_fixture_with_includes, fetch_recent_window, fetch_upcoming_window,
};
use crate::data_fetcher::api::cms_api::fetch_cms_upcoming;
use crate::data_fetcher::hydration::{hydrate_player_names, hydrate_team_refs};
use crate::data_fetcher::models::Fixture;
use crate::data_fetcher::processors::{derive_category, normalize_fixture, normalize_fixtures};
use crate::error::AppError;
use crate::server::responses::{error_response, parse_id};
use crate::server::state::AppState;

/// Include set for the enriched single-fixture view.
const FIXTURE_DETAIL_INCLUDES: &str = "league,localteam,visitorteam,runs,batting,bowling";

/// Fetches one fixture and enriches it: batting/bowling rows get player
/// names hydrated, bare team ids get their references filled. Shared by the
/// fixture-detail and scorecard routes.
pub(crate) async fn fetch_enriched_fixture(
    state: &AppState,
    fixture_id: i64,
) -> Result<serde_json::Value, AppError> {
    let raw =
        fetch_fixture_with_includes(&state.client, &state.config, fixture_id, FIXTURE_DETAIL_INCLUDES)
            .await?;

    let fixture = normalize_fixture(&raw).ok_or_else(|| {
        AppError::upstream_no_data(
            format!("Fixture {fixture_id} has no start timestamp"),
            "fixtures",
        )
    })?;

    let mut batting = raw.batting.clone();
    let mut bowling = raw.bowling.clone();
    let mut fixtures = [fixture];
    hydrate_player_names(&state.client, &state.config, &mut batting).await;
    hydrate_player_names(&state.client, &state.config, &mut bowling).await;
    hydrate_team_refs(&state.client, &state.config, &mut fixtures).await;
    let [fixture] = fixtures;

    let mut payload = serde_json::to_value(&fixture)?;
    payload["batting"] = serde_json::to_value(&batting)?;
    payload["bowling"] = serde_json::to_value(&bowling)?;
    Ok(payload)
}

/// GET /api/fixture/{id}
pub async fn fixture_detail(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let fixture_id = match parse_id(&path, "fixture id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    match fetch_enriched_fixture(&state, fixture_id).await {
        Ok(payload) => HttpResponse::Ok().json(json!({ "data": payload })),
        Err(e) => error_response(&e),
    }
}

/// GET /api/fixture/upcoming
///
/// Reshapes the CMS `{sportmonks_id, payload}` envelope into canonical
/// fixtures and attaches the category derived from the league name.
pub async fn cms_upcoming(state: Data<AppState>) -> impl Responder {
    let rows = match fetch_cms_upcoming(&state.client, &state.config).await {
        Ok(rows) => rows,
        Err(e) => return error_response(&e),
    };

    let mut fixtures: Vec<Fixture> = rows
        .iter()
        .filter_map(|row| {
            let mut fixture = normalize_fixture(&row.payload)?;
            if fixture.id == 0 {
                fixture.id = row.sportmonks_id;
            }
            let league_name = fixture.league.as_ref().map(|l| l.name.as_str()).unwrap_or("");
            fixture.category = Some(derive_category(league_name).to_string());
            Some(fixture)
        })
        .collect();
    fixtures.sort_by(|a, b| a.starting_at.cmp(&b.starting_at));

    HttpResponse::Ok().json(json!({ "data": fixtures }))
}

/// GET /api/upcoming
pub async fn upcoming(state: Data<AppState>) -> impl Responder {
    match fetch_upcoming_window(&state.client, &state.config).await {
        Ok(rows) => {
            let mut fixtures = normalize_fixtures(&rows);
            fixtures.sort_by(|a, b| a.starting_at.cmp(&b.starting_at));
            HttpResponse::Ok().json(json!({ "data": fixtures }))
        }
        Err(e) => error_response(&e),
    }
}

/// GET /api/recent
pub async fn recent(state: Data<AppState>) -> impl Responder {
    match fetch_recent_window(&state.client, &state.config).await {
        Ok(rows) => {
            let mut fixtures = normalize_fixtures(&rows);
            fixtures.sort_by(|a, b| b.starting_at.cmp(&a.starting_at));
            HttpResponse::Ok().json(json!({ "data": fixtures }))
        }
        Err(e) => error_response(&e),
    }
}
