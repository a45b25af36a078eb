pub mod api;
pub mod cache;
pub mod hydration;
pub mod models;
pub mod processors;

pub use api::fetch_live_aggregate;
pub use cache::TtlCache;
pub use hydration::{hydrate_player_names, hydrate_team_refs};
pub use models::{Fixture, Player, TeamRef};
pub use processors::{group_team_rankings, normalize_fixture, normalize_fixtures};
