//! CMS content pass-through: news listing, categories and the sitemap feed.

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use std::collections::HashMap;

use super::forward_params;
use crate::data_fetcher::api::cms_api::{fetch_news, fetch_news_categories, fetch_news_sitemap};
use crate::server::responses::error_response;
use crate::server::state::AppState;

/// GET /api/news
pub async fn news_index(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let params = forward_params(&query, &["page", "per_page", "category", "q"]);
    match fetch_news(&state.client, &state.config, &params).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => error_response(&e),
    }
}

/// GET /api/news/categories
pub async fn news_categories(state: Data<AppState>) -> impl Responder {
    match fetch_news_categories(&state.client, &state.config).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => error_response(&e),
    }
}

/// GET /api/news/sitemap
pub async fn news_sitemap(state: Data<AppState>) -> impl Responder {
    match fetch_news_sitemap(&state.client, &state.config).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => error_response(&e),
    }
}
