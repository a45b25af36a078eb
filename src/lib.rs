//! Cricket Live-Score Aggregation Library
//!
//! This library fetches fixture, player, team, ranking and news data from
//! upstream cricket providers, normalizes the heterogeneous JSON shapes into
//! a small set of canonical DTOs, hydrates missing denormalized fields via
//! secondary lookups, and serves the result as JSON over HTTP with a
//! short-window cache in front of the live-score aggregate.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cricscore::config::Config;
//! use cricscore::data_fetcher::api::fetch_live_aggregate;
//! use cricscore::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = reqwest::Client::new();
//!
//!     // One three-way fan-out: live, upcoming and recent fixtures
//!     let payload = fetch_live_aggregate(&client, &config).await?;
//!     println!("{} live matches", payload["live"].as_array().map_or(0, |a| a.len()));
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod server;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::fetch_live_aggregate;
pub use data_fetcher::cache::TtlCache;
pub use data_fetcher::models::{Fixture, GroupedRankings, Player, TeamRef};
pub use data_fetcher::processors::group_team_rankings;
pub use error::AppError;
pub use server::{AppState, configure_routes};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
