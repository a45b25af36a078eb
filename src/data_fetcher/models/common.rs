use serde::{Deserialize, Serialize};

/// The provider wraps every resource in a `{ "data": ... }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Pass-through envelope for paginated listings. The `data` rows and the
/// pagination `meta` block are forwarded verbatim; this layer does no shaping
/// beyond query-parameter forwarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedEnvelope {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// Typed variant of the paginated envelope, for listings this layer
/// reshapes row-by-row while still forwarding the pagination `meta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedData<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// A country reference as served by `/api/countries`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub id: i64,
    pub name: String,
}
