pub mod fixture_mapping;
pub mod player_mapping;
pub mod ranking_grouping;
pub mod season_logic;

pub use fixture_mapping::{
    derive_category, is_live, logo_url_for_team, map_team, normalize_fixture, normalize_fixtures,
};
pub use player_mapping::{normalize_player, normalize_players, role_from_position};
pub use ranking_grouping::group_team_rankings;
pub use season_logic::resolve_current_season;
