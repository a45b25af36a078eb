//! The aggregated live view: live, upcoming and recent fixtures fetched as
//! one three-way fan-out and normalized into a single payload.

use reqwest::Client;
use serde_json::json;
use tracing::{info, instrument};

use super::cricket_api::{fetch_live_fixtures, fetch_recent_window, fetch_upcoming_window};
use crate::config::Config;
use crate::data_fetcher::processors::normalize_fixtures;
use crate::error::AppError;

/// Performs the full live-score fan-out: three concurrent upstream calls
/// joined before any shaping, so the visible ordering is driven by input
/// order even though completion races internally. Any single failure fails
/// the aggregate; the caller's cache is what makes a recent success
/// reusable.
#[instrument(skip(client, config))]
pub async fn fetch_live_aggregate(
    client: &Client,
    config: &Config,
) -> Result<serde_json::Value, AppError> {
    let (live, upcoming, recent) = tokio::join!(
        fetch_live_fixtures(client, config),
        fetch_upcoming_window(client, config),
        fetch_recent_window(client, config),
    );

    let live = normalize_fixtures(&live?);
    let mut upcoming = normalize_fixtures(&upcoming?);
    let mut recent = normalize_fixtures(&recent?);

    // ISO-8601 start timestamps sort lexicographically
    upcoming.sort_by(|a, b| a.starting_at.cmp(&b.starting_at));
    recent.sort_by(|a, b| b.starting_at.cmp(&a.starting_at));

    info!(
        "Live aggregate assembled: {} live, {} upcoming, {} recent",
        live.len(),
        upcoming.len(),
        recent.len()
    );

    Ok(json!({
        "live": live,
        "upcoming": upcoming,
        "recent": recent,
    }))
}
