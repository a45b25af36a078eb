//! Finished-match archives: upstream pagination envelope forwarded verbatim.

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use std::collections::HashMap;

use super::forward_params;
use crate::data_fetcher::api::cms_api::fetch_archives;
use crate::server::responses::error_response;
use crate::server::state::AppState;

/// GET /api/archives
pub async fn archives_index(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let params = forward_params(&query, &["date", "format", "category", "page", "per_page"]);
    match fetch_archives(&state.client, &state.config, &params).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => error_response(&e),
    }
}
