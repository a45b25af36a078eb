use serde::{Deserialize, Serialize};

/// A team-ranking entry as the provider sends it: one entry per
/// (format, gender) combination, carrying the ranked team list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpstreamRankingEntry {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default, rename = "type")]
    pub format_type: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub team: Vec<RankedTeam>,
}

/// A ranked team with its nested position/matches/points/rating tuple.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RankedTeam {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub ranking: Option<RankingDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RankingDetails {
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub matches: Option<i64>,
    #[serde(default)]
    pub points: Option<i64>,
    #[serde(default)]
    pub rating: Option<i64>,
}

/// Grouped ranking output for one format: the ranked team lists split by
/// gender. A later upstream entry for the same gender fully replaces an
/// earlier one.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GroupedRankings {
    pub men: Vec<RankedTeam>,
    pub women: Vec<RankedTeam>,
}
