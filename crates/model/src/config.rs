use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub http_timeout_secs: u64,
    pub customer_limit: u32,
    pub page_size: usize,
    pub demo_fallback: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout_secs: 15,
            customer_limit: 100,
            page_size: 10,
            demo_fallback: true,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("RETAIN_API_BASE_URL")
            .or_else(|| lookup("API_BASE_URL"))
            .unwrap_or(defaults.api_base_url);
        let http_timeout_secs = lookup("RETAIN_HTTP_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|v: &u64| *v > 0)
            .unwrap_or(defaults.http_timeout_secs);
        let customer_limit = lookup("RETAIN_CUSTOMER_LIMIT")
            .and_then(|v| v.parse().ok())
            .filter(|v: &u32| *v > 0)
            .unwrap_or(defaults.customer_limit);
        let page_size = lookup("RETAIN_PAGE_SIZE")
            .and_then(|v| v.parse().ok())
            .filter(|v: &usize| *v > 0)
            .unwrap_or(defaults.page_size);
        let demo_fallback = lookup("RETAIN_DEMO_FALLBACK")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(defaults.demo_fallback);

        let settings = Self {
            api_base_url,
            http_timeout_secs,
            customer_limit,
            page_size,
            demo_fallback,
        };
        settings.base_url()?;
        Ok(settings)
    }

    pub fn base_url(&self) -> Result<Url, ConfigError> {
        parse_base_url(&self.api_base_url)
    }

    pub fn with_base_url(mut self, api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url.into();
        parse_base_url(&api_base_url)?;
        self.api_base_url = api_base_url;
        Ok(self)
    }
}

pub fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}
