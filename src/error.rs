//! Error types for headline-pager
//!
//! Two layers:
//! - [`FetchError`] is the taxonomy a single fetch can fail with. It never
//!   escapes the pager; the controller turns it into an error status.
//! - [`Error`] covers everything else (config loading, terminal I/O) and is
//!   what the public setup APIs and the binary return.

use thiserror::Error;

/// Message shown when the provider rejects the credential
pub const INVALID_KEY_MESSAGE: &str = "Invalid API Key. Please check your API key.";

/// Reasons a single page fetch can fail
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Missing required config field: {field}")]
    ConfigMissing { field: String },

    #[error("Invalid page {page}: pages start at 1")]
    InvalidPage { page: u32 },

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Provider error: {message}")]
    Provider { message: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl FetchError {
    /// Create a missing config error
    pub fn config_missing(field: impl Into<String>) -> Self {
        Self::ConfigMissing {
            field: field.into(),
        }
    }

    /// Create an HTTP status error, special-casing rejected credentials
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        let message = if status == 401 {
            INVALID_KEY_MESSAGE.to_string()
        } else {
            message.into()
        };
        Self::HttpStatus { status, message }
    }

    /// Create a provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Short machine-readable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigMissing { .. } => "config_missing",
            Self::InvalidPage { .. } => "invalid_page",
            Self::HttpStatus { .. } => "http_error",
            Self::Provider { .. } => "provider_error",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::Transport(_) | Self::InvalidUrl(_) => "transport_error",
        }
    }

    /// Human-readable message for the error view
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigMissing { field } => {
                format!("API key is missing. Set `{field}` in the config file or NEWS_API_KEY.")
            }
            Self::HttpStatus { status: 401, .. } => INVALID_KEY_MESSAGE.to_string(),
            Self::HttpStatus { status, .. } => format!("HTTP error! status: {status}"),
            Self::Provider { message } => message.clone(),
            Self::MalformedResponse { .. } => "No articles found in response".to_string(),
            other => other.to_string(),
        }
    }
}

/// The main error type for headline-pager
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for headline-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for a single fetch
pub type FetchResult<T> = std::result::Result<T, FetchError>;
