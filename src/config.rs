//! Pager configuration
//!
//! Everything fixed at mount time: provider, credential, category, page size
//! and presentation limits. Loaded from a YAML file, then layered with the
//! `NEWS_API_KEY` environment variable and finally CLI overrides.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable consulted for the credential
pub const API_KEY_ENV: &str = "NEWS_API_KEY";

/// Default articles per page
pub const DEFAULT_PAGE_SIZE: u32 = 8;

// ============================================================================
// Provider Kind
// ============================================================================

/// Upstream news API
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// newsapi.org top headlines
    #[default]
    #[value(name = "newsapi")]
    NewsApi,
    /// The Guardian content API
    Guardian,
}

impl ProviderKind {
    /// Default base URL for this provider
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::NewsApi => "https://newsapi.org",
            Self::Guardian => "https://content.guardianapis.com",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewsApi => f.write_str("newsapi"),
            Self::Guardian => f.write_str("guardian"),
        }
    }
}

// ============================================================================
// Pager Config
// ============================================================================

/// Complete pager configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagerConfig {
    /// Which API to talk to
    #[serde(default)]
    pub provider: ProviderKind,

    /// Override for the provider's base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Two-letter country code (NewsAPI only)
    #[serde(default = "default_country")]
    pub country: String,

    /// NewsAPI category or Guardian section
    #[serde(default = "default_category")]
    pub category: String,

    /// Articles per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Provider credential
    #[serde(default)]
    pub api_key: Option<String>,

    /// Optional request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Title truncation length in characters
    #[serde(default = "default_title_limit")]
    pub title_limit: usize,

    /// Description truncation length in characters
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
}

fn default_country() -> String {
    "us".to_string()
}

fn default_category() -> String {
    "general".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_title_limit() -> usize {
    70
}

fn default_description_limit() -> usize {
    100
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            base_url: None,
            country: default_country(),
            category: default_category(),
            page_size: default_page_size(),
            api_key: None,
            timeout_secs: None,
            title_limit: default_title_limit(),
            description_limit: default_description_limit(),
        }
    }
}

// The credential must never reach logs
impl fmt::Debug for PagerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagerConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("country", &self.country)
            .field("category", &self.category)
            .field("page_size", &self.page_size)
            .field("api_key", &self.api_key.as_ref().map(|_| "HIDDEN"))
            .field("timeout_secs", &self.timeout_secs)
            .field("title_limit", &self.title_limit)
            .field("description_limit", &self.description_limit)
            .finish()
    }
}

impl PagerConfig {
    /// Parse a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Fill the credential from the environment when none is configured
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_api_key_fallback(std::env::var(API_KEY_ENV).ok())
    }

    /// Fill the credential from `fallback` when none is configured
    #[must_use]
    pub fn with_api_key_fallback(mut self, fallback: Option<String>) -> Self {
        if self.api_key.as_deref().map_or(true, str::is_empty) {
            self.api_key = fallback.filter(|k| !k.is_empty());
        }
        self
    }

    /// Check value constraints
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be greater than 0"));
        }
        if self.category.trim().is_empty() {
            return Err(Error::invalid_value("category", "must not be empty"));
        }
        if self.provider == ProviderKind::NewsApi && self.country.trim().is_empty() {
            return Err(Error::invalid_value("country", "must not be empty"));
        }
        if let Some(base) = &self.base_url {
            url::Url::parse(base)
                .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        }
        Ok(())
    }

    /// Base URL actually used for requests
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }

    /// Request timeout, if configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// YAML rendering with the credential redacted
    pub fn to_redacted_yaml(&self) -> Result<String> {
        let mut shown = self.clone();
        if shown.api_key.is_some() {
            shown.api_key = Some("HIDDEN".to_string());
        }
        Ok(serde_yaml::to_string(&shown)?)
    }
}
