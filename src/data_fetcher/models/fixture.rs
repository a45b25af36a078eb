use super::team::{TeamRef, UpstreamTeam};
use serde::{Deserialize, Serialize};

/// A fixture row as the provider sends it. Nested team objects, runs and
/// scorecard rows are only present when the corresponding `include` was
/// requested, so everything defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpstreamFixture {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(default)]
    pub starting_at: Option<String>,
    #[serde(default)]
    pub live: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub league_id: Option<i64>,
    #[serde(default)]
    pub league: Option<UpstreamLeague>,
    #[serde(default)]
    pub localteam_id: Option<i64>,
    #[serde(default)]
    pub visitorteam_id: Option<i64>,
    #[serde(default)]
    pub localteam: Option<UpstreamTeam>,
    #[serde(default)]
    pub visitorteam: Option<UpstreamTeam>,
    #[serde(default)]
    pub runs: Vec<UpstreamRun>,
    #[serde(default)]
    pub batting: Vec<BattingRow>,
    #[serde(default)]
    pub bowling: Vec<BowlingRow>,
}

/// League metadata, either nested inside a fixture or served standalone.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpstreamLeague {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub seasons: Option<Vec<UpstreamSeason>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpstreamSeason {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_current: Option<bool>,
    #[serde(default)]
    pub league_id: Option<i64>,
}

/// Per-team, per-inning score snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpstreamRun {
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub inning: Option<i64>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub wickets: Option<i64>,
    #[serde(default)]
    pub overs: Option<f64>,
}

/// A batting scorecard row. `player_name` is denormalized upstream and often
/// missing; hydration fills it from a player point lookup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BattingRow {
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub ball: i64,
    #[serde(default)]
    pub four_x: i64,
    #[serde(default)]
    pub six_x: i64,
    #[serde(default)]
    pub rate: f64,
}

/// A bowling scorecard row, same hydration contract as [`BattingRow`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BowlingRow {
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub overs: f64,
    #[serde(default)]
    pub runs: i64,
    #[serde(default)]
    pub wickets: i64,
    #[serde(default)]
    pub medians: i64,
    #[serde(default)]
    pub rate: f64,
}

/// Canonical fixture shape served to the UI.
///
/// `localteam_id`/`visitorteam_id` are always present (0 when upstream omits
/// them) even if the nested team reference is not, so the UI can fall back to
/// "Team {id}" labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    pub starting_at: String,
    pub live: bool,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<LeagueRef>,
    pub localteam_id: i64,
    pub visitorteam_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localteam: Option<TeamRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visitorteam: Option<TeamRef>,
    #[serde(default)]
    pub runs: Vec<Run>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeagueRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Run {
    pub team_id: i64,
    pub inning: i64,
    pub score: i64,
    pub wickets: i64,
    pub overs: f64,
}

/// The CMS serves its curated upcoming feed as rows of
/// `{ sportmonks_id, payload }` where `payload` is a raw provider fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsFixtureRow {
    pub sportmonks_id: i64,
    pub payload: UpstreamFixture,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_fixture_defaults() {
        let fixture: UpstreamFixture = serde_json::from_str("{}").unwrap();
        assert!(fixture.id.is_none());
        assert!(fixture.starting_at.is_none());
        assert!(fixture.live.is_none());
        assert!(fixture.runs.is_empty());
        assert!(fixture.batting.is_empty());
        assert!(fixture.bowling.is_empty());
    }

    #[test]
    fn test_upstream_fixture_full_row() {
        let json = r#"{
            "id": 50001,
            "round": "1st ODI",
            "starting_at": "2026-08-10T09:30:00.000000Z",
            "live": true,
            "status": "LIVE",
            "league_id": 1,
            "localteam_id": 36,
            "visitorteam_id": 38,
            "localteam": {"id": 36, "name": "Australia", "code": "AUS"},
            "runs": [
                {"team_id": 36, "inning": 1, "score": 287, "wickets": 6, "overs": 50.0}
            ]
        }"#;
        let fixture: UpstreamFixture = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.id, Some(50001));
        assert_eq!(fixture.live, Some(true));
        assert_eq!(fixture.localteam_id, Some(36));
        assert_eq!(fixture.runs.len(), 1);
        assert_eq!(fixture.runs[0].score, Some(287));
    }

    #[test]
    fn test_batting_row_missing_name() {
        let json = r#"{"player_id": 121, "score": 45, "ball": 38}"#;
        let row: BattingRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.player_id, Some(121));
        assert!(row.player_name.is_none());
        assert_eq!(row.score, 45);
        assert_eq!(row.four_x, 0);
    }

    #[test]
    fn test_cms_fixture_row_envelope() {
        let json = r#"{
            "sportmonks_id": 50001,
            "payload": {"id": 50001, "starting_at": "2026-08-10T09:30:00.000000Z"}
        }"#;
        let row: CmsFixtureRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.sportmonks_id, 50001);
        assert_eq!(row.payload.id, Some(50001));
    }

    #[test]
    fn test_fixture_serialization_skips_absent_optionals() {
        let fixture = Fixture {
            id: 50001,
            round: None,
            starting_at: "2026-08-10T09:30:00.000000Z".to_string(),
            live: false,
            status: "NS".to_string(),
            note: None,
            category: None,
            league: None,
            localteam_id: 36,
            visitorteam_id: 38,
            localteam: None,
            visitorteam: None,
            runs: vec![],
        };
        let json = serde_json::to_string(&fixture).unwrap();
        assert!(json.contains("\"localteam_id\":36"));
        assert!(!json.contains("\"localteam\":null"));
        assert!(!json.contains("\"category\""));
    }
}
