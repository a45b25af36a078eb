//! Team listing and detail, with name/logo fallbacks applied.

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::data_fetcher::api::cricket_api::{fetch_team, fetch_teams};
use crate::data_fetcher::processors::map_team;
use crate::error::AppError;
use crate::server::responses::{error_response, parse_id};
use crate::server::state::AppState;

/// GET /api/teams
pub async fn teams_index(state: Data<AppState>) -> impl Responder {
    match fetch_teams(&state.client, &state.config).await {
        Ok(rows) => {
            let teams: Vec<_> = rows
                .iter()
                .filter_map(|team| map_team(Some(team), None))
                .collect();
            HttpResponse::Ok().json(json!({ "data": teams }))
        }
        Err(e) => error_response(&e),
    }
}

/// GET /api/teams/{id}
pub async fn team_detail(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let team_id = match parse_id(&path, "team id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    match fetch_team(&state.client, &state.config, team_id).await {
        Ok(row) => match map_team(Some(&row), Some(team_id)) {
            Some(team) => HttpResponse::Ok().json(json!({ "data": team })),
            None => error_response(&AppError::upstream_no_data(
                format!("Team {team_id} has no usable id"),
                "teams",
            )),
        },
        Err(e) => error_response(&e),
    }
}
