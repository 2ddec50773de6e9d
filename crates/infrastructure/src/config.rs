//! Portal runtime configuration.

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "CHAIRSIDE_API_URL";

/// Environment variable overriding the data directory.
pub const DATA_DIR_VAR: &str = "CHAIRSIDE_DATA_DIR";

/// API base used when no override is present.
const DEFAULT_API_URL: &str = "http://localhost:3000/";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL could not be parsed.
    #[error("invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// The parser's complaint.
        source: url::ParseError,
    },

    /// No data directory could be determined for this platform.
    #[error("no data directory available; set CHAIRSIDE_DATA_DIR")]
    NoDataDir,
}

/// Runtime configuration for the portal client.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the portal API. Always ends with a slash so endpoint
    /// paths join below it rather than replacing its path.
    pub api_base_url: Url,
    /// Directory holding the durable session record.
    pub data_dir: PathBuf,
}

impl PortalConfig {
    /// Builds the configuration from environment overrides and platform
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL override is unparseable or no data
    /// directory exists and none was configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_base_url = parse_base_url(&raw)?;

        let data_dir = match env::var(DATA_DIR_VAR) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .map(|dir| dir.join("chairside"))
                .ok_or(ConfigError::NoDataDir)?,
        };

        Ok(Self {
            api_base_url,
            data_dir,
        })
    }

    /// Builds a configuration with explicit values, used by tests and
    /// embedders.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_base_url` cannot be parsed.
    pub fn new(api_base_url: &str, data_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url)?,
            data_dir: data_dir.into(),
        })
    }
}

/// Parses the base URL, normalizing it to end with a slash.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}
