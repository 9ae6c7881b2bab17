//! Validated runtime settings shared by the generator and the importer.
//!
//! Binaries build these once at startup (from CLI flags and environment) and
//! hand them to library code, so library crates never read the environment
//! themselves.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_MODELS_DIR, OVERPASS_ENDPOINT, WIKIDATA_ENDPOINT,
};

/// Settings of a model generation run.
///
/// # Examples
/// ```
/// use config::settings::GeneratorConfig;
/// let cfg = GeneratorConfig::default();
/// assert!(cfg.models_dir.ends_with("models"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Directory the `.glb` files are written to.
    pub models_dir: PathBuf,
    /// Build archetypes on the rayon pool instead of sequentially.
    pub parallel: bool,
}

impl GeneratorConfig {
    /// Builds a generator configuration, rejecting an empty output directory.
    ///
    /// # Examples
    /// ```
    /// use config::settings::GeneratorConfig;
    /// let cfg = GeneratorConfig::new("out/models", false).expect("valid config");
    /// assert!(!cfg.parallel);
    /// assert!(GeneratorConfig::new("", true).is_err());
    /// ```
    pub fn new(models_dir: impl Into<PathBuf>, parallel: bool) -> Result<Self, ConfigError> {
        let models_dir = models_dir.into();
        if models_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("models_dir"));
        }
        Ok(Self {
            models_dir,
            parallel,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            parallel: true,
        }
    }
}

/// Settings of an import run.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportConfig {
    /// Timeout applied to each outbound HTTP call.
    pub http_timeout: Duration,
    /// Wikidata action API endpoint.
    pub wikidata_endpoint: String,
    /// Overpass interpreter endpoint.
    pub overpass_endpoint: String,
}

impl ImportConfig {
    /// Builds an import configuration.
    ///
    /// # Examples
    /// ```
    /// use config::settings::ImportConfig;
    /// let cfg = ImportConfig::new(5_000, "https://a.example/api", "https://b.example/q")
    ///     .expect("valid config");
    /// assert_eq!(cfg.http_timeout.as_millis(), 5_000);
    /// assert!(ImportConfig::new(0, "https://a", "https://b").is_err());
    /// ```
    pub fn new(
        http_timeout_ms: u64,
        wikidata_endpoint: impl Into<String>,
        overpass_endpoint: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if http_timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(http_timeout_ms));
        }
        let wikidata_endpoint = wikidata_endpoint.into();
        let overpass_endpoint = overpass_endpoint.into();
        for endpoint in [&wikidata_endpoint, &overpass_endpoint] {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::InvalidEndpoint(endpoint.clone()));
            }
        }
        Ok(Self {
            http_timeout: Duration::from_millis(http_timeout_ms),
            wikidata_endpoint,
            overpass_endpoint,
        })
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            http_timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
            wikidata_endpoint: WIKIDATA_ENDPOINT.to_string(),
            overpass_endpoint: OVERPASS_ENDPOINT.to_string(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a required path is empty.
    EmptyPath(&'static str),
    /// Raised when the HTTP timeout is zero.
    InvalidTimeout(u64),
    /// Raised when an endpoint is not an http(s) URL.
    InvalidEndpoint(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath(name) => write!(f, "{name} must not be empty"),
            ConfigError::InvalidTimeout(value) => {
                write!(f, "http timeout must be positive: {value}ms")
            }
            ConfigError::InvalidEndpoint(value) => {
                write!(f, "endpoint must be an http(s) URL: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
