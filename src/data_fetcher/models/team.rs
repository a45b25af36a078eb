use serde::{Deserialize, Serialize};

/// A team row as the provider sends it. Every field except the id has been
/// observed missing in the wild, so everything is optional and normalization
/// decides the fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpstreamTeam {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub national_team: Option<bool>,
}

/// Canonical team reference embedded in fixtures and rankings. `name` and
/// `image_path` are always populated, synthesized when upstream omits them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamRef {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub image_path: String,
}
