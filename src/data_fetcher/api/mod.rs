pub mod cms_api;
pub mod cricket_api;
pub mod fetch_utils;
pub mod http_client;
pub mod live_feed;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
#[allow(unused_imports)]
pub use http_client::*;
// Re-export the generic fetch and the typed resource fetchers
pub use cms_api::*;
pub use cricket_api::*;
pub use fetch_utils::{fetch, fetch_with_timeout};
pub use live_feed::fetch_live_aggregate;
