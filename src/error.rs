use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from upstream: {0}")]
    UpstreamFetch(#[from] reqwest::Error),

    #[error("Failed to parse upstream response: {0}")]
    UpstreamJson(#[from] serde_json::Error),

    // Specific upstream HTTP failures
    #[error("Upstream resource not found (404): {url}")]
    UpstreamNotFound { url: String },

    #[error("Upstream HTTP error ({status}): {message} (URL: {url})")]
    UpstreamHttp {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Upstream rate limit reached: {message} (URL: {url})")]
    RateLimited { message: String, url: String },

    #[error("Upstream returned malformed JSON: {message} (URL: {url})")]
    UpstreamParse { message: String, url: String },

    #[error("Upstream returned empty or missing data: {message} (URL: {url})")]
    UpstreamNoData { message: String, url: String },

    // Request-side failures surfaced by route handlers
    #[error("Invalid request parameter: {0}")]
    Validation(String),

    #[error("Missing required environment variable or config value: {0}")]
    MissingToken(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a validation error for a bad path or query parameter
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an upstream not found error
    pub fn upstream_not_found(url: impl Into<String>) -> Self {
        Self::UpstreamNotFound { url: url.into() }
    }

    /// Create an upstream HTTP error for any non-2xx status
    pub fn upstream_http(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::UpstreamHttp {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a rate limit error (HTTP 429 or a throttling phrase in the body)
    pub fn rate_limited(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn upstream_parse(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::UpstreamParse {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn upstream_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::UpstreamNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Check if the error came from upstream throttling. Route handlers map
    /// this to a fixed 503 body instead of a generic 5xx.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AppError::RateLimited { .. })
    }

    /// Check if error indicates the upstream explicitly reported absence
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::UpstreamNotFound { .. } | AppError::UpstreamNoData { .. }
        )
    }

    /// The HTTP status this error maps to at the route boundary.
    ///
    /// Soft-fail listing routes bypass this mapping entirely and answer 200
    /// with an empty data array; everything else goes through here.
    pub fn http_status(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            AppError::RateLimited { .. } => 503,
            AppError::UpstreamNotFound { .. } => 404,
            AppError::UpstreamHttp { .. }
            | AppError::UpstreamParse { .. }
            | AppError::UpstreamNoData { .. }
            | AppError::UpstreamFetch(_)
            | AppError::UpstreamJson(_) => 502,
            AppError::MissingToken(_)
            | AppError::Io(_)
            | AppError::TomlSerialize(_)
            | AppError::TomlDeserialize(_)
            | AppError::Config(_)
            | AppError::LogSetup(_) => 500,
        }
    }
}
