//! Client configuration.
//!
//! Values come from `PORTAL_*` environment variables (a `.env` file is
//! loaded by the binary before this runs), falling back to
//! [`portal_core::defaults`].

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use portal_core::defaults;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ConfigError> for portal_core::Error {
    fn from(e: ConfigError) -> Self {
        portal_core::Error::Config(e.to_string())
    }
}

/// Where to fetch articles from and how to build image URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// CMS origin, without a trailing slash.
    pub cms_base_url: String,
    /// JSON:API collection path, starting with `/`.
    pub articles_path: String,
    /// Prefix for file `uri.url` values, without a trailing slash.
    pub image_base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cms_base_url: defaults::CMS_URL.to_string(),
            articles_path: defaults::ARTICLES_PATH.to_string(),
            image_base_url: defaults::IMAGE_BASE_URL.to_string(),
            timeout_secs: defaults::FETCH_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Build a config for a CMS origin, with default path and timeout.
    ///
    /// Images are served from the same origin.
    pub fn for_origin(origin: &str) -> Self {
        let origin = trim_base_url(origin);
        Self {
            cms_base_url: origin.clone(),
            image_base_url: origin,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let cms_base_url = env::var(defaults::ENV_CMS_URL)
            .map(|v| trim_base_url(&v))
            .unwrap_or_else(|_| defaults::CMS_URL.to_string());
        let articles_path = env::var(defaults::ENV_ARTICLES_PATH)
            .unwrap_or_else(|_| defaults::ARTICLES_PATH.to_string());
        let image_base_url = env::var(defaults::ENV_IMAGE_BASE_URL)
            .map(|v| trim_base_url(&v))
            .unwrap_or_else(|_| defaults::IMAGE_BASE_URL.to_string());
        let timeout_secs = parse_env_or(
            defaults::ENV_FETCH_TIMEOUT_SECS,
            defaults::FETCH_TIMEOUT_SECS,
        );

        let config = Self {
            cms_base_url,
            articles_path,
            image_base_url,
            timeout_secs,
        };
        debug!(
            cms_base_url = %config.cms_base_url,
            articles_path = %config.articles_path,
            image_base_url = %config.image_base_url,
            timeout_secs = config.timeout_secs,
            "Loaded client config from environment"
        );
        config
    }

    /// Full URL of the article collection.
    pub fn articles_url(&self) -> String {
        format!("{}{}", self.cms_base_url, self.articles_path)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_http_url("cms_base_url", &self.cms_base_url)?;
        validate_http_url("image_base_url", &self.image_base_url)?;

        if !self.articles_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "articles_path must start with '/', got: {}",
                self.articles_path
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_http_url(name: &str, url: &str) -> ConfigResult<()> {
    if url.is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{} must start with http:// or https://, got: {}",
            name, url
        )));
    }
    Ok(())
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Parse a numeric env var, falling back (with a warning) when it is
/// unset or unparseable.
pub fn parse_env_or<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    var = name,
                    value = %raw,
                    fallback = %default,
                    "Ignoring unparseable environment value"
                );
                default
            }
        },
        Err(_) => default,
    }
}
