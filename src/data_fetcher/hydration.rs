//! Hydration helpers: fill in missing denormalized fields on rows by looking
//! up the referenced entity separately.
//!
//! Lookups are deduplicated by id and issued concurrently; a failed lookup
//! leaves the affected rows untouched and never fails the batch. Row order
//! is preserved and re-running a pass over hydrated rows is a no-op, since
//! the missing-field check is the gate.

use futures::future::join_all;
use reqwest::Client;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::api::cricket_api::{fetch_player, fetch_team};
use crate::data_fetcher::models::{BattingRow, BowlingRow, Fixture};
use crate::data_fetcher::processors::{map_team, normalize_player};

/// Seam for scorecard rows that reference a player by id and carry an
/// optional denormalized name.
pub trait PlayerNamed {
    fn player_id(&self) -> Option<i64>;
    fn player_name(&self) -> Option<&str>;
    fn set_player_name(&mut self, name: String);
}

impl PlayerNamed for BattingRow {
    fn player_id(&self) -> Option<i64> {
        self.player_id
    }
    fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }
    fn set_player_name(&mut self, name: String) {
        self.player_name = Some(name);
    }
}

impl PlayerNamed for BowlingRow {
    fn player_id(&self) -> Option<i64> {
        self.player_id
    }
    fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }
    fn set_player_name(&mut self, name: String) {
        self.player_name = Some(name);
    }
}

fn needs_name<T: PlayerNamed>(row: &T) -> bool {
    row.player_name().is_none_or(str::is_empty)
}

/// Collects the distinct ids of rows missing a name, in first-seen order.
fn missing_player_ids<T: PlayerNamed>(rows: &[T]) -> Vec<i64> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for row in rows {
        if !needs_name(row) {
            continue;
        }
        if let Some(id) = row.player_id() {
            if id > 0 && seen.insert(id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Fills missing player names on a scorecard row collection. Returns the
/// number of point lookups issued, which is the number of distinct missing
/// ids regardless of row count.
#[instrument(skip(client, config, rows))]
pub async fn hydrate_player_names<T: PlayerNamed>(
    client: &Client,
    config: &Config,
    rows: &mut [T],
) -> usize {
    let ids = missing_player_ids(rows);
    if ids.is_empty() {
        debug!("No rows need player name hydration");
        return 0;
    }

    let lookups = ids.iter().map(|&id| async move {
        match fetch_player(client, config, id).await {
            Ok(player) => Some((id, normalize_player(&player).fullname)),
            Err(e) => {
                warn!("Player name hydration unavailable for id {}: {}", id, e);
                None
            }
        }
    });
    let names: HashMap<i64, String> = join_all(lookups).await.into_iter().flatten().collect();

    for row in rows.iter_mut() {
        if needs_name(row) {
            if let Some(id) = row.player_id() {
                if let Some(name) = names.get(&id) {
                    row.set_player_name(name.clone());
                }
            }
        }
    }

    debug!(
        "Hydrated player names: {} lookups, {} resolved",
        ids.len(),
        names.len()
    );
    ids.len()
}

/// Fills missing team references on fixtures whose rows carry only the bare
/// team id. Same contract as player-name hydration: dedupe, concurrent
/// lookups, per-id failures ignored. Returns the number of lookups issued.
#[instrument(skip(client, config, fixtures))]
pub async fn hydrate_team_refs(
    client: &Client,
    config: &Config,
    fixtures: &mut [Fixture],
) -> usize {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for fixture in fixtures.iter() {
        for (team_ref, id) in [
            (&fixture.localteam, fixture.localteam_id),
            (&fixture.visitorteam, fixture.visitorteam_id),
        ] {
            if team_ref.is_none() && id > 0 && seen.insert(id) {
                ids.push(id);
            }
        }
    }
    if ids.is_empty() {
        return 0;
    }

    let lookups = ids.iter().map(|&id| async move {
        match fetch_team(client, config, id).await {
            Ok(team) => map_team(Some(&team), Some(id)).map(|mapped| (id, mapped)),
            Err(e) => {
                warn!("Team hydration unavailable for id {}: {}", id, e);
                None
            }
        }
    });
    let teams: HashMap<i64, _> = join_all(lookups).await.into_iter().flatten().collect();

    for fixture in fixtures.iter_mut() {
        if fixture.localteam.is_none() {
            fixture.localteam = teams.get(&fixture.localteam_id).cloned();
        }
        if fixture.visitorteam.is_none() {
            fixture.visitorteam = teams.get(&fixture.visitorteam_id).cloned();
        }
    }

    ids.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::env_vars;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serial_test::serial;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base: &str) -> Config {
        Config {
            provider_base: base.to_string(),
            provider_token: Some("test-token".to_string()),
            ..Config::default()
        }
    }

    fn batting_row(player_id: i64, name: Option<&str>) -> BattingRow {
        BattingRow {
            player_id: Some(player_id),
            player_name: name.map(str::to_string),
            ..Default::default()
        }
    }

    fn mount_player(server_path: &str, id: i64, name: &str) -> Mock {
        Mock::given(method("GET"))
            .and(path(server_path.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": id, "fullname": name}
            })))
    }

    #[test]
    fn test_missing_ids_deduplicated_in_first_seen_order() {
        // 11 rows, 3 distinct missing ids
        let mut rows = Vec::new();
        for i in 0..11 {
            rows.push(batting_row([7, 8, 9][i % 3], None));
        }
        assert_eq!(missing_player_ids(&rows), vec![7, 8, 9]);
    }

    #[test]
    fn test_rows_with_names_are_not_candidates() {
        let rows = vec![
            batting_row(7, Some("Steve Smith")),
            batting_row(8, None),
            batting_row(9, Some("")),
        ];
        // An empty name still counts as missing
        assert_eq!(missing_player_ids(&rows), vec![8, 9]);
    }

    #[tokio::test]
    #[serial]
    async fn test_lookup_count_tracks_distinct_ids() {
        unsafe {
            std::env::remove_var(env_vars::PROVIDER_TOKEN);
        }
        let server = MockServer::start().await;
        mount_player("/players/7", 7, "Steve Smith")
            .expect(1)
            .mount(&server)
            .await;
        mount_player("/players/8", 8, "Pat Cummins")
            .expect(1)
            .mount(&server)
            .await;
        mount_player("/players/9", 9, "Mitchell Starc")
            .expect(1)
            .mount(&server)
            .await;

        let mut rows = Vec::new();
        for i in 0..11 {
            rows.push(batting_row([7, 8, 9][i % 3], None));
        }

        let client = create_test_http_client();
        let lookups =
            hydrate_player_names(&client, &test_config(&server.uri()), &mut rows).await;
        assert_eq!(lookups, 3);
        assert_eq!(rows[0].player_name.as_deref(), Some("Steve Smith"));
        assert_eq!(rows[1].player_name.as_deref(), Some("Pat Cummins"));
        assert_eq!(rows[10].player_name.as_deref(), Some("Pat Cummins"));
    }

    #[tokio::test]
    #[serial]
    async fn test_single_failure_leaves_other_rows_hydrated() {
        unsafe {
            std::env::remove_var(env_vars::PROVIDER_TOKEN);
        }
        let server = MockServer::start().await;
        mount_player("/players/7", 7, "Steve Smith")
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/players/8"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut rows = vec![batting_row(7, None), batting_row(8, None)];
        let client = create_test_http_client();
        hydrate_player_names(&client, &test_config(&server.uri()), &mut rows).await;

        assert_eq!(rows[0].player_name.as_deref(), Some("Steve Smith"));
        // The failed lookup left the row's original value intact
        assert!(rows[1].player_name.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_hydration_is_idempotent() {
        unsafe {
            std::env::remove_var(env_vars::PROVIDER_TOKEN);
        }
        let server = MockServer::start().await;
        mount_player("/players/7", 7, "Steve Smith")
            .expect(1)
            .mount(&server)
            .await;

        let mut rows = vec![batting_row(7, None)];
        let client = create_test_http_client();
        let config = test_config(&server.uri());

        let first = hydrate_player_names(&client, &config, &mut rows).await;
        assert_eq!(first, 1);
        let second = hydrate_player_names(&client, &config, &mut rows).await;
        assert_eq!(second, 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_hydrate_team_refs_fills_missing_sides() {
        unsafe {
            std::env::remove_var(env_vars::PROVIDER_TOKEN);
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/36"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": 36, "name": "Australia", "code": "AUS"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut fixtures = vec![Fixture {
            id: 1,
            round: None,
            starting_at: "2026-08-10T09:30:00.000000Z".to_string(),
            live: false,
            status: "NS".to_string(),
            note: None,
            category: None,
            league: None,
            localteam_id: 36,
            visitorteam_id: 0,
            localteam: None,
            visitorteam: None,
            runs: vec![],
        }];

        let client = create_test_http_client();
        let lookups =
            hydrate_team_refs(&client, &test_config(&server.uri()), &mut fixtures).await;
        assert_eq!(lookups, 1);
        assert_eq!(
            fixtures[0].localteam.as_ref().unwrap().name,
            "Australia"
        );
        // A zero id is not a hydratable reference
        assert!(fixtures[0].visitorteam.is_none());
    }
}
