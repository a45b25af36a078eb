use serde::{Deserialize, Serialize};

/// A player row as the provider sends it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpstreamPlayer {
    pub id: i64,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub country: Option<PlayerCountry>,
    #[serde(default)]
    pub position: Option<PlayerPosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerCountry {
    #[serde(default)]
    pub name: Option<String>,
}

/// The provider encodes the role as a numeric position id.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerPosition {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Canonical player shape served to the UI. `role` is the coarse label
/// derived from the numeric position code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: i64,
    pub fullname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
