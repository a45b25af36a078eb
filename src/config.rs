use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Configuration structure for the aggregation service.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the cricket data provider. Should include the scheme.
    #[serde(default = "default_provider_base")]
    pub provider_base: String,
    /// API token for the cricket data provider. Usually supplied via the
    /// CRICKET_API_TOKEN environment variable instead of the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_token: Option<String>,
    /// Base URL of the CMS backend serving news, archives and the curated
    /// upcoming-fixtures feed.
    #[serde(default = "default_cms_base")]
    pub cms_base: String,
    /// API token for the CMS backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cms_token: Option<String>,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for upstream requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_provider_base() -> String {
    constants::DEFAULT_PROVIDER_BASE.to_string()
}

fn default_cms_base() -> String {
    constants::DEFAULT_CMS_BASE.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider_base: default_provider_base(),
            provider_token: None,
            cms_base: default_cms_base(),
            cms_token: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, falling
    /// back to built-in defaults when no file exists. Environment variables
    /// override config file values.
    ///
    /// # Environment Variables
    /// - `CRICKET_API_BASE` / `CMS_API_BASE` - Override upstream base URLs
    /// - `CRICSCORE_LOG_FILE` - Override log file path
    /// - `CRICSCORE_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    ///
    /// Tokens are deliberately NOT resolved here: they are read at request
    /// time so that a missing token fails only the dependent route.
    pub async fn load() -> Result<Self, AppError> {
        let config_path = Self::get_config_path();
        Self::load_from_path(&config_path).await
    }

    /// Loads configuration from an explicit path; used by tests and the
    /// `--config` CLI override.
    pub async fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let mut config: Config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(base) = std::env::var(env_vars::PROVIDER_BASE) {
            if !base.is_empty() {
                config.provider_base = base;
            }
        }
        if let Ok(base) = std::env::var(env_vars::CMS_BASE) {
            if !base.is_empty() {
                config.cms_base = base;
            }
        }
        if let Ok(log_file) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file);
        }
        if let Ok(timeout) = std::env::var(env_vars::HTTP_TIMEOUT) {
            if let Ok(parsed) = timeout.parse::<u64>() {
                config.http_timeout_seconds = parsed;
            }
        }

        Ok(config)
    }

    /// Saves the current configuration to the default location, creating
    /// parent directories as needed.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();
        if let Some(parent) = Path::new(&config_path).parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).await?;
        Ok(())
    }

    /// Resolves the provider API token: environment first, config file
    /// second. Read at request time so token rotation needs no restart.
    pub fn provider_token(&self) -> Result<String, AppError> {
        resolve_token(
            env_vars::PROVIDER_TOKEN,
            self.provider_token.as_deref(),
        )
    }

    /// Resolves the CMS API token with the same precedence as
    /// [`Config::provider_token`].
    pub fn cms_token(&self) -> Result<String, AppError> {
        resolve_token(env_vars::CMS_TOKEN, self.cms_token.as_deref())
    }

    /// Platform-specific config file path
    pub fn get_config_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cricscore")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }

    /// Platform-specific default log directory
    pub fn get_log_dir_path() -> String {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cricscore")
            .join("logs")
            .to_string_lossy()
            .to_string()
    }
}

fn resolve_token(var: &'static str, from_config: Option<&str>) -> Result<String, AppError> {
    match std::env::var(var) {
        Ok(token) if !token.is_empty() => Ok(token),
        _ => from_config
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or(AppError::MissingToken(var)),
    }
}
