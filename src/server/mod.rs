//! HTTP surface: route table and application wiring.

pub mod handlers;
pub mod responses;
pub mod state;

pub use state::AppState;

use actix_web::{HttpResponse, web};

/// Registers every route. Literal segments ("/fixture/upcoming") are
/// registered before their dynamic siblings ("/fixture/{id}") so they match
/// first.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/live", web::get().to(handlers::live::live_scores))
            .route("/archives", web::get().to(handlers::archives::archives_index))
            .route("/catalog", web::get().to(handlers::catalog::catalog_index))
            .route("/catalog/{id}", web::get().to(handlers::catalog::catalog_detail))
            .route("/countries", web::get().to(handlers::countries::countries_index))
            .route("/fixture/upcoming", web::get().to(handlers::fixtures::cms_upcoming))
            .route("/fixture/{id}", web::get().to(handlers::fixtures::fixture_detail))
            .route("/upcoming", web::get().to(handlers::fixtures::upcoming))
            .route("/recent", web::get().to(handlers::fixtures::recent))
            .route("/leagues", web::get().to(handlers::leagues::leagues_index))
            .route("/leagues/{id}", web::get().to(handlers::leagues::league_detail))
            .route(
                "/leagues/{id}/fixtures",
                web::get().to(handlers::leagues::league_fixtures),
            )
            .route(
                "/leagues/{id}/teams",
                web::get().to(handlers::leagues::league_teams),
            )
            .route("/match/{id}", web::get().to(handlers::matches::match_detail))
            .route(
                "/match/{id}/commentary",
                web::get().to(handlers::matches::match_commentary),
            )
            .route(
                "/match/{id}/scorecard",
                web::get().to(handlers::matches::match_scorecard),
            )
            .route("/news", web::get().to(handlers::news::news_index))
            .route("/news/categories", web::get().to(handlers::news::news_categories))
            .route("/news/sitemap", web::get().to(handlers::news::news_sitemap))
            .route("/players", web::get().to(handlers::players::players_index))
            .route("/players/{id}", web::get().to(handlers::players::player_detail))
            .route("/player/{id}", web::get().to(handlers::players::player_detail))
            .route("/sm/players", web::get().to(handlers::players::sm_players))
            .route(
                "/seasons/{id}/standings",
                web::get().to(handlers::seasons::season_standings),
            )
            .route(
                "/seasons/{id}/stats",
                web::get().to(handlers::seasons::season_stats),
            )
            .route(
                "/seasons/{id}/teams",
                web::get().to(handlers::seasons::season_teams),
            )
            .route(
                "/seasons/{id}/venues",
                web::get().to(handlers::seasons::season_venues),
            )
            .route("/team-rankings", web::get().to(handlers::rankings::team_rankings))
            .route("/teams", web::get().to(handlers::teams::teams_index))
            .route("/teams/{id}", web::get().to(handlers::teams::team_detail)),
    )
    .route("/health", web::get().to(HttpResponse::Ok));
}
