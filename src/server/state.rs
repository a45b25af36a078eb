use crate::config::Config;
use crate::data_fetcher::api::http_client::create_http_client_with_timeout;
use crate::data_fetcher::cache::TtlCache;
use crate::error::AppError;

/// Shared application state: one pooled HTTP client, the loaded config and
/// the injected TTL cache. Wrapped in `web::Data` (an Arc) by the server,
/// so handlers share a single instance.
pub struct AppState {
    pub config: Config,
    pub client: reqwest::Client,
    pub cache: TtlCache,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self {
            config,
            client,
            cache: TtlCache::default(),
        })
    }
}
