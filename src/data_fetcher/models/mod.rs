pub mod common;
pub mod fixture;
pub mod player;
pub mod ranking;
pub mod team;

// Re-export all public types for convenience
pub use common::{Country, DataEnvelope, PaginatedData, PaginatedEnvelope};
pub use fixture::{
    BattingRow, BowlingRow, CmsFixtureRow, Fixture, LeagueRef, Run, UpstreamFixture,
    UpstreamLeague, UpstreamRun, UpstreamSeason,
};
pub use player::{Player, PlayerCountry, PlayerPosition, UpstreamPlayer};
pub use ranking::{GroupedRankings, RankedTeam, RankingDetails, UpstreamRankingEntry};
pub use team::{TeamRef, UpstreamTeam};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_implementations() {
        let team = UpstreamTeam {
            id: Some(36),
            name: Some("Australia".to_string()),
            code: Some("AUS".to_string()),
            image_path: None,
            national_team: Some(true),
        };
        let cloned_team = team.clone();
        assert_eq!(team.id, cloned_team.id);
        assert_eq!(team.name, cloned_team.name);

        let fixture = UpstreamFixture {
            id: Some(50001),
            starting_at: Some("2026-08-10T09:30:00.000000Z".to_string()),
            localteam: Some(team),
            ..Default::default()
        };
        let cloned_fixture = fixture.clone();
        assert_eq!(fixture.id, cloned_fixture.id);
        assert_eq!(
            fixture.localteam.as_ref().unwrap().id,
            cloned_fixture.localteam.as_ref().unwrap().id
        );

        let entry = UpstreamRankingEntry {
            resource: Some("teamrankings".to_string()),
            format_type: Some("T20I".to_string()),
            gender: Some("women".to_string()),
            team: vec![RankedTeam::default()],
        };
        let cloned_entry = entry.clone();
        assert_eq!(entry.format_type, cloned_entry.format_type);
        assert_eq!(entry.team.len(), cloned_entry.team.len());
    }
}
