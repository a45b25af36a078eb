//! Generic catalog pass-through with query forwarding.

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use std::collections::HashMap;

use super::forward_params;
use crate::data_fetcher::api::cricket_api::fetch_catalog;
use crate::server::responses::{error_response, parse_id};
use crate::server::state::AppState;

const CATALOG_PARAMS: &[&str] = &["page", "per_page", "country_id", "ids", "q"];

/// GET /api/catalog
pub async fn catalog_index(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let params = forward_params(&query, CATALOG_PARAMS);
    match fetch_catalog(&state.client, &state.config, None, &params).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => error_response(&e),
    }
}

/// GET /api/catalog/{id}
pub async fn catalog_detail(
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let catalog_id = match parse_id(&path, "catalog id") {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    let params = forward_params(&query, CATALOG_PARAMS);
    match fetch_catalog(&state.client, &state.config, Some(catalog_id), &params).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => error_response(&e),
    }
}
