//! Fixture and team normalization: reshapes raw provider rows into the
//! canonical shapes the UI consumes. Normalization never fails a request;
//! fields that cannot be derived get explicit fallbacks instead.

use crate::constants::TEAM_LOGO_CDN_TEMPLATE;
use crate::data_fetcher::models::{
    Fixture, LeagueRef, Run, TeamRef, UpstreamFixture, UpstreamTeam,
};
use tracing::debug;

/// Synthesizes a team logo URL from the CDN template for teams whose row
/// carries no explicit image path.
pub fn logo_url_for_team(team_id: i64) -> String {
    TEAM_LOGO_CDN_TEMPLATE.replace("{id}", &team_id.to_string())
}

/// Maps an upstream team object to a canonical reference.
///
/// Name preference: explicit name, then short code, then `Team {id}`.
/// Logo preference: explicit image path, then the CDN template keyed by id.
/// When no id can be found at all (neither on the nested object nor on the
/// parent fixture), the reference is omitted rather than fabricated.
pub fn map_team(team: Option<&UpstreamTeam>, fallback_id: Option<i64>) -> Option<TeamRef> {
    let id = team.and_then(|t| t.id).or(fallback_id)?;

    let name = team
        .and_then(|t| t.name.clone())
        .or_else(|| team.and_then(|t| t.code.clone()))
        .unwrap_or_else(|| format!("Team {id}"));

    let image_path = team
        .and_then(|t| t.image_path.clone())
        .unwrap_or_else(|| logo_url_for_team(id));

    Some(TeamRef {
        id,
        name,
        code: team.and_then(|t| t.code.clone()),
        image_path,
    })
}

/// Derives the live flag from the explicit upstream flag or, failing that,
/// from the status string.
pub fn is_live(live_flag: Option<bool>, status: &str) -> bool {
    if live_flag == Some(true) {
        return true;
    }
    status.contains("LIVE") || status.contains("In Progress")
}

/// Normalizes one upstream fixture row into the canonical shape.
///
/// Returns `None` for rows lacking a start timestamp; those are treated as
/// malformed and dropped entirely, never surfaced with a zero value.
///
/// Nested team references are kept only when upstream sent a team object;
/// a bare id row keeps `localteam_id`/`visitorteam_id` populated so the UI
/// can fall back to a "Team {id}" label, and team hydration can fill the
/// reference later.
pub fn normalize_fixture(fixture: &UpstreamFixture) -> Option<Fixture> {
    let starting_at = match &fixture.starting_at {
        Some(ts) if !ts.is_empty() => ts.clone(),
        _ => {
            debug!(
                "Dropping fixture without start timestamp: id={:?}",
                fixture.id
            );
            return None;
        }
    };

    let status = fixture.status.clone().unwrap_or_default();
    let live = is_live(fixture.live, &status);

    // Ids the UI depends on are coerced defensively: absent upstream ids
    // become 0 so "Team {id}" fallbacks still render.
    let localteam_id = fixture.localteam_id.unwrap_or(0);
    let visitorteam_id = fixture.visitorteam_id.unwrap_or(0);

    let league = fixture.league.as_ref().and_then(|league| {
        let id = league.id.or(fixture.league_id)?;
        Some(LeagueRef {
            id,
            name: league.name.clone().unwrap_or_default(),
        })
    });

    let runs = fixture
        .runs
        .iter()
        .map(|run| Run {
            team_id: run.team_id.unwrap_or(0),
            inning: run.inning.unwrap_or(0),
            score: run.score.unwrap_or(0),
            wickets: run.wickets.unwrap_or(0),
            overs: run.overs.unwrap_or(0.0),
        })
        .collect();

    Some(Fixture {
        id: fixture.id.unwrap_or(0),
        round: fixture.round.clone(),
        starting_at,
        live,
        status,
        note: fixture.note.clone(),
        category: None,
        league,
        localteam_id,
        visitorteam_id,
        localteam: fixture
            .localteam
            .as_ref()
            .and_then(|team| map_team(Some(team), fixture.localteam_id)),
        visitorteam: fixture
            .visitorteam
            .as_ref()
            .and_then(|team| map_team(Some(team), fixture.visitorteam_id)),
        runs,
    })
}

/// Normalizes a batch of fixtures, dropping malformed rows.
pub fn normalize_fixtures(fixtures: &[UpstreamFixture]) -> Vec<Fixture> {
    fixtures.iter().filter_map(normalize_fixture).collect()
}

/// Derives the coarse category label from a league name via substring
/// matching. This is a documented heuristic: league naming is free-form
/// upstream and misclassification is possible.
pub fn derive_category(league_name: &str) -> &'static str {
    if league_name.contains("Test") {
        "Test"
    } else if league_name.contains("ODI") {
        "ODI"
    } else if league_name.contains("T20") {
        "T20"
    } else if league_name.contains("International") {
        "International"
    } else {
        "Leagues"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{UpstreamLeague, UpstreamRun};

    fn fixture_with_start(id: i64) -> UpstreamFixture {
        UpstreamFixture {
            id: Some(id),
            starting_at: Some("2026-08-10T09:30:00.000000Z".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_map_team_prefers_name_then_code_then_placeholder() {
        let full = UpstreamTeam {
            id: Some(36),
            name: Some("Australia".to_string()),
            code: Some("AUS".to_string()),
            ..Default::default()
        };
        assert_eq!(map_team(Some(&full), None).unwrap().name, "Australia");

        let code_only = UpstreamTeam {
            id: Some(36),
            code: Some("AUS".to_string()),
            ..Default::default()
        };
        assert_eq!(map_team(Some(&code_only), None).unwrap().name, "AUS");

        let bare = UpstreamTeam {
            id: Some(36),
            ..Default::default()
        };
        assert_eq!(map_team(Some(&bare), None).unwrap().name, "Team 36");
    }

    #[test]
    fn test_map_team_synthesizes_logo_from_cdn_template() {
        let bare = UpstreamTeam {
            id: Some(36),
            ..Default::default()
        };
        let mapped = map_team(Some(&bare), None).unwrap();
        assert_eq!(
            mapped.image_path,
            "https://cdn.sportmonks.com/images/cricket/teams/36.png"
        );

        let with_logo = UpstreamTeam {
            id: Some(36),
            image_path: Some("https://elsewhere.example.com/aus.png".to_string()),
            ..Default::default()
        };
        let mapped = map_team(Some(&with_logo), None).unwrap();
        assert_eq!(mapped.image_path, "https://elsewhere.example.com/aus.png");
    }

    #[test]
    fn test_map_team_without_any_id_is_omitted() {
        let anonymous = UpstreamTeam {
            name: Some("TBD".to_string()),
            ..Default::default()
        };
        assert!(map_team(Some(&anonymous), None).is_none());
        assert!(map_team(None, None).is_none());
        // A fixture-level id rescues a missing nested id
        assert!(map_team(None, Some(38)).is_some());
    }

    #[test]
    fn test_live_flag_detection() {
        assert!(is_live(Some(true), ""));
        assert!(is_live(None, "LIVE"));
        assert!(is_live(None, "In Progress"));
        assert!(is_live(Some(false), "LIVE"));
        assert!(!is_live(None, "NS"));
        assert!(!is_live(Some(false), "Finished"));
    }

    #[test]
    fn test_fixture_without_start_timestamp_is_dropped() {
        let mut fixture = fixture_with_start(1);
        fixture.starting_at = None;
        assert!(normalize_fixture(&fixture).is_none());

        let mut fixture = fixture_with_start(1);
        fixture.starting_at = Some(String::new());
        assert!(normalize_fixture(&fixture).is_none());
    }

    #[test]
    fn test_team_ids_round_trip_exactly() {
        let mut fixture = fixture_with_start(50001);
        fixture.localteam_id = Some(36);
        fixture.visitorteam_id = Some(38);
        fixture.localteam = Some(UpstreamTeam {
            id: Some(36),
            name: Some("Australia".to_string()),
            ..Default::default()
        });

        let normalized = normalize_fixture(&fixture).unwrap();
        assert_eq!(normalized.localteam_id, 36);
        assert_eq!(normalized.visitorteam_id, 38);
        assert_eq!(normalized.localteam.unwrap().id, 36);
        // No nested object upstream means no nested ref, only the bare id
        assert!(normalized.visitorteam.is_none());
    }

    #[test]
    fn test_nested_team_without_id_uses_fixture_level_id() {
        let mut fixture = fixture_with_start(50001);
        fixture.localteam_id = Some(36);
        fixture.localteam = Some(UpstreamTeam {
            name: Some("Australia".to_string()),
            ..Default::default()
        });
        let normalized = normalize_fixture(&fixture).unwrap();
        let localteam = normalized.localteam.unwrap();
        assert_eq!(localteam.id, 36);
        assert_eq!(localteam.name, "Australia");
    }

    #[test]
    fn test_missing_required_ids_default_to_zero() {
        let fixture = UpstreamFixture {
            starting_at: Some("2026-08-10T09:30:00.000000Z".to_string()),
            ..Default::default()
        };
        let normalized = normalize_fixture(&fixture).unwrap();
        assert_eq!(normalized.id, 0);
        assert_eq!(normalized.localteam_id, 0);
        assert_eq!(normalized.visitorteam_id, 0);
        assert!(normalized.localteam.is_none());
    }

    #[test]
    fn test_runs_are_coerced() {
        let mut fixture = fixture_with_start(1);
        fixture.runs = vec![UpstreamRun {
            team_id: Some(36),
            inning: Some(1),
            score: None,
            wickets: None,
            overs: Some(43.2),
        }];
        let normalized = normalize_fixture(&fixture).unwrap();
        assert_eq!(normalized.runs.len(), 1);
        assert_eq!(normalized.runs[0].score, 0);
        assert_eq!(normalized.runs[0].overs, 43.2);
    }

    #[test]
    fn test_league_ref_requires_an_id() {
        let mut fixture = fixture_with_start(1);
        fixture.league = Some(UpstreamLeague {
            name: Some("Big Bash League".to_string()),
            ..Default::default()
        });
        assert!(normalize_fixture(&fixture).unwrap().league.is_none());

        fixture.league_id = Some(5);
        let league = normalize_fixture(&fixture).unwrap().league.unwrap();
        assert_eq!(league.id, 5);
        assert_eq!(league.name, "Big Bash League");
    }

    #[test]
    fn test_normalize_fixtures_drops_only_malformed_rows() {
        let mut no_start = fixture_with_start(2);
        no_start.starting_at = None;
        let rows = vec![fixture_with_start(1), no_start, fixture_with_start(3)];
        let normalized = normalize_fixtures(&rows);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].id, 1);
        assert_eq!(normalized[1].id, 3);
    }

    #[test]
    fn test_derive_category_substring_matching() {
        assert_eq!(derive_category("ICC Test Championship"), "Test");
        assert_eq!(derive_category("ODI World Cup"), "ODI");
        assert_eq!(derive_category("T20 Blast"), "T20");
        assert_eq!(derive_category("International Friendly"), "International");
        assert_eq!(derive_category("Indian Premier League"), "Leagues");
    }
}
