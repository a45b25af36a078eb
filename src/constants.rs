//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for upstream HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Hardcoded fallback base URL for the cricket data provider, used when
/// neither config nor environment supplies one
pub const DEFAULT_PROVIDER_BASE: &str = "https://cricket.sportmonks.com/api/v2.0";

/// Hardcoded fallback base URL for the CMS backend
pub const DEFAULT_CMS_BASE: &str = "https://cms.cricscore.app/api/v1";

/// CDN URL template for team logos, keyed by team id. Used when the upstream
/// row carries no explicit image path.
pub const TEAM_LOGO_CDN_TEMPLATE: &str = "https://cdn.sportmonks.com/images/cricket/teams/{id}.png";

/// Cache freshness windows in seconds
pub mod cache_ttl {
    /// Freshness window for the aggregated live-score payload. Requests
    /// within this window are served from the cache slot without touching
    /// upstream.
    pub const LIVE_SCORES_SECONDS: u64 = 60;

    /// Freshness window for the countries list (changes ~never)
    pub const COUNTRIES_SECONDS: u64 = 86400;
}

/// Cache slot keys. The live resource uses a single fixed key; there is no
/// general-purpose key space.
pub mod cache_keys {
    pub const LIVE_SCORES: &str = "live_scores";
    pub const COUNTRIES: &str = "countries";
}

/// Fixture fetch windows for the aggregated live view
pub mod fetch_windows {
    /// How far ahead the upcoming-fixtures window reaches (days)
    pub const UPCOMING_DAYS: i64 = 90;

    /// How far back the recent-fixtures window reaches (days)
    pub const RECENT_DAYS: i64 = 45;
}

/// Environment variable names. All are read at request time; a missing token
/// fails only the routes that depend on it.
pub mod env_vars {
    /// Base URL override for the cricket data provider
    pub const PROVIDER_BASE: &str = "CRICKET_API_BASE";

    /// API token for the cricket data provider
    pub const PROVIDER_TOKEN: &str = "CRICKET_API_TOKEN";

    /// Base URL override for the CMS backend
    pub const CMS_BASE: &str = "CMS_API_BASE";

    /// API token for the CMS backend
    pub const CMS_TOKEN: &str = "CMS_API_TOKEN";

    /// Log file path override
    pub const LOG_FILE: &str = "CRICSCORE_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "CRICSCORE_HTTP_TIMEOUT";
}

/// Timeouts applied to individual upstream calls
pub mod timeouts {
    /// Explicit timeout for the CMS upcoming-fixtures fetch (seconds). This
    /// is the only per-call timeout in the system; every other upstream call
    /// relies on the client default.
    pub const CMS_UPCOMING_SECONDS: u64 = 10;
}

/// Player position codes as used by the upstream provider
pub mod positions {
    pub const BATSMAN: i64 = 1;
    pub const BOWLER: i64 = 2;
    pub const ALLROUNDER: i64 = 3;
    pub const WICKETKEEPER: i64 = 4;
}

/// Fixed message bodies the UI depends on verbatim
pub mod messages {
    /// Body returned with HTTP 503 when the provider throttles us
    pub const RATE_LIMITED: &str = "SportMonks rate limit reached. Please try again soon.";

    /// Soft-fail message for a league without any seasons
    pub const NO_SEASONS: &str = "No seasons found for this league";
}
