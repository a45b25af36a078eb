//! Player routes, applying the position-code-to-role mapping on the way out.

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use super::forward_params;
use crate::data_fetcher::api::cricket_api::{fetch_player, fetch_players, fetch_players_raw};
use crate::data_fetcher::processors::{normalize_player, normalize_players};
use crate::server::responses::{error_response, parse_id};
use crate::server::state::AppState;

const PLAYER_LIST_PARAMS: &[&str] = &["page", "per_page", "q", "country_id"];

/// GET /api/players
pub async fn players_index(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let params = forward_params(&query, PLAYER_LIST_PARAMS);
    match fetch_players(&state.client, &state.config, &params).await {
        Ok(page) => {
            let players = normalize_players(&page.data);
            HttpResponse::Ok().json(json!({ "data": players, "meta": page.meta }))
        }
        Err(e) => error_response(&e),
    }
}

/// GET /api/player/{id} and GET /api/players/{id}
///
/// Both paths are served; the front-end historically calls either.
pub async fn player_detail(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let player_id = match parse_id(&path, "player id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    match fetch_player(&state.client, &state.config, player_id).await {
        Ok(player) => HttpResponse::Ok().json(json!({ "data": normalize_player(&player) })),
        Err(e) => error_response(&e),
    }
}

/// GET /api/sm/players
///
/// Raw provider mirror with query forwarding and no reshaping.
pub async fn sm_players(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let params = forward_params(&query, PLAYER_LIST_PARAMS);
    match fetch_players_raw(&state.client, &state.config, &params).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => error_response(&e),
    }
}
