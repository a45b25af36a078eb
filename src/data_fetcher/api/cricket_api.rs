//! Typed fetchers for the cricket data provider's resources.
//!
//! Every function resolves the API token up front (failing fast with the
//! missing variable's name before any network call) and unwraps the
//! provider's `{ "data": ... }` envelope.

use chrono::{Duration as ChronoDuration, Utc};
use reqwest::Client;

use super::fetch_utils::fetch;
use super::urls::build_resource_url;
use crate::config::Config;
use crate::constants::fetch_windows;
use crate::data_fetcher::models::{
    Country, DataEnvelope, PaginatedData, UpstreamFixture, UpstreamLeague,
    UpstreamRankingEntry, UpstreamTeam, UpstreamPlayer,
};
use crate::error::AppError;

/// Include set used wherever fixtures are listed for the UI.
const FIXTURE_LIST_INCLUDES: &str = "league,localteam,visitorteam,runs";

fn provider_url(
    config: &Config,
    path: &str,
    params: &[(&str, &str)],
) -> Result<String, AppError> {
    let token = config.provider_token()?;
    Ok(build_resource_url(&config.provider_base, path, &token, params))
}

/// Fixtures currently in play.
pub async fn fetch_live_fixtures(
    client: &Client,
    config: &Config,
) -> Result<Vec<UpstreamFixture>, AppError> {
    let url = provider_url(config, "livescores", &[("include", FIXTURE_LIST_INCLUDES)])?;
    let envelope: DataEnvelope<Vec<UpstreamFixture>> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// Fixtures whose start falls inside `[from, to]`, in upstream order.
pub async fn fetch_fixtures_between(
    client: &Client,
    config: &Config,
    from: chrono::NaiveDate,
    to: chrono::NaiveDate,
) -> Result<Vec<UpstreamFixture>, AppError> {
    let window = format!("{},{}", from.format("%Y-%m-%d"), to.format("%Y-%m-%d"));
    let url = provider_url(
        config,
        "fixtures",
        &[
            ("filter[starts_between]", window.as_str()),
            ("include", FIXTURE_LIST_INCLUDES),
        ],
    )?;
    let envelope: DataEnvelope<Vec<UpstreamFixture>> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// Fixtures starting between now and now + the upcoming window (90 days).
pub async fn fetch_upcoming_window(
    client: &Client,
    config: &Config,
) -> Result<Vec<UpstreamFixture>, AppError> {
    let today = Utc::now().date_naive();
    let to = today + ChronoDuration::days(fetch_windows::UPCOMING_DAYS);
    fetch_fixtures_between(client, config, today, to).await
}

/// Fixtures that started between now - the recent window (45 days) and now.
pub async fn fetch_recent_window(
    client: &Client,
    config: &Config,
) -> Result<Vec<UpstreamFixture>, AppError> {
    let today = Utc::now().date_naive();
    let from = today - ChronoDuration::days(fetch_windows::RECENT_DAYS);
    fetch_fixtures_between(client, config, from, today).await
}

/// Single fixture with a caller-chosen include set. The match detail,
/// commentary and scorecard routes differ only in what they include.
pub async fn fetch_fixture_with_includes(
    client: &Client,
    config: &Config,
    fixture_id: i64,
    includes: &str,
) -> Result<UpstreamFixture, AppError> {
    let path = format!("fixtures/{fixture_id}");
    let url = provider_url(config, &path, &[("include", includes)])?;
    let envelope: DataEnvelope<UpstreamFixture> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// Single fixture forwarded verbatim. The match detail and commentary
/// routes pass the provider shape straight through; only the include set
/// differs between them.
pub async fn fetch_fixture_raw(
    client: &Client,
    config: &Config,
    fixture_id: i64,
    includes: &str,
) -> Result<serde_json::Value, AppError> {
    let path = format!("fixtures/{fixture_id}");
    let url = provider_url(config, &path, &[("include", includes)])?;
    fetch(client, &url).await
}

/// All leagues, with their seasons for current-season resolution.
pub async fn fetch_leagues(
    client: &Client,
    config: &Config,
) -> Result<Vec<UpstreamLeague>, AppError> {
    let url = provider_url(config, "leagues", &[("include", "seasons")])?;
    let envelope: DataEnvelope<Vec<UpstreamLeague>> = fetch(client, &url).await?;
    Ok(envelope.data)
}

pub async fn fetch_league(
    client: &Client,
    config: &Config,
    league_id: i64,
) -> Result<UpstreamLeague, AppError> {
    let path = format!("leagues/{league_id}");
    let url = provider_url(config, &path, &[("include", "seasons")])?;
    let envelope: DataEnvelope<UpstreamLeague> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// All fixtures of one season.
pub async fn fetch_season_fixtures(
    client: &Client,
    config: &Config,
    season_id: i64,
) -> Result<Vec<UpstreamFixture>, AppError> {
    let path = format!("fixtures/season/{season_id}");
    let url = provider_url(config, &path, &[("include", FIXTURE_LIST_INCLUDES)])?;
    let envelope: DataEnvelope<Vec<UpstreamFixture>> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// All teams participating in one season.
pub async fn fetch_season_teams(
    client: &Client,
    config: &Config,
    season_id: i64,
) -> Result<Vec<UpstreamTeam>, AppError> {
    let path = format!("teams/season/{season_id}");
    let url = provider_url(config, &path, &[])?;
    let envelope: DataEnvelope<Vec<UpstreamTeam>> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// Season-scoped aggregate (standings, stats, venues) forwarded verbatim;
/// the UI consumes these shapes directly.
pub async fn fetch_season_resource(
    client: &Client,
    config: &Config,
    resource: &str,
    season_id: i64,
) -> Result<serde_json::Value, AppError> {
    let path = format!("{resource}/season/{season_id}");
    let url = provider_url(config, &path, &[])?;
    fetch(client, &url).await
}

/// Player listing with forwarded pagination/search parameters.
pub async fn fetch_players(
    client: &Client,
    config: &Config,
    params: &[(&str, &str)],
) -> Result<PaginatedData<UpstreamPlayer>, AppError> {
    let url = provider_url(config, "players", params)?;
    fetch(client, &url).await
}

/// Player listing forwarded verbatim, for the raw provider mirror route.
pub async fn fetch_players_raw(
    client: &Client,
    config: &Config,
    params: &[(&str, &str)],
) -> Result<serde_json::Value, AppError> {
    let url = provider_url(config, "players", params)?;
    fetch(client, &url).await
}

pub async fn fetch_player(
    client: &Client,
    config: &Config,
    player_id: i64,
) -> Result<UpstreamPlayer, AppError> {
    let path = format!("players/{player_id}");
    let url = provider_url(config, &path, &[("include", "country,position")])?;
    let envelope: DataEnvelope<UpstreamPlayer> = fetch(client, &url).await?;
    Ok(envelope.data)
}

pub async fn fetch_teams(
    client: &Client,
    config: &Config,
) -> Result<Vec<UpstreamTeam>, AppError> {
    let url = provider_url(config, "teams", &[])?;
    let envelope: DataEnvelope<Vec<UpstreamTeam>> = fetch(client, &url).await?;
    Ok(envelope.data)
}

pub async fn fetch_team(
    client: &Client,
    config: &Config,
    team_id: i64,
) -> Result<UpstreamTeam, AppError> {
    let path = format!("teams/{team_id}");
    let url = provider_url(config, &path, &[])?;
    let envelope: DataEnvelope<UpstreamTeam> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// Raw ranking entries; men/women/format grouping happens in the
/// ranking-grouping processor on the consumer side, not here.
pub async fn fetch_team_rankings(
    client: &Client,
    config: &Config,
) -> Result<Vec<UpstreamRankingEntry>, AppError> {
    let url = provider_url(config, "team-rankings", &[])?;
    let envelope: DataEnvelope<Vec<UpstreamRankingEntry>> = fetch(client, &url).await?;
    Ok(envelope.data)
}

pub async fn fetch_countries(
    client: &Client,
    config: &Config,
) -> Result<Vec<Country>, AppError> {
    let url = provider_url(config, "countries", &[])?;
    let envelope: DataEnvelope<Vec<Country>> = fetch(client, &url).await?;
    Ok(envelope.data)
}

/// Generic catalog pass-through with a whitelist of forwarded parameters.
pub async fn fetch_catalog(
    client: &Client,
    config: &Config,
    catalog_id: Option<i64>,
    params: &[(&str, &str)],
) -> Result<serde_json::Value, AppError> {
    let path = match catalog_id {
        Some(id) => format!("catalog/{id}"),
        None => "catalog".to_string(),
    };
    let url = provider_url(config, &path, params)?;
    fetch(client, &url).await
}
