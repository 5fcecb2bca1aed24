//! Runner settings
//!
//! Settings are layered: built-in defaults, then the optional user file at
//! `<config dir>/subgraph-tester/config.toml`, then command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::paths::settings_path;
use super::{Error, Result};

/// Default location of the test configuration, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "tests/integration/config.json";

/// Default subgraph name used to build the endpoint
pub const DEFAULT_SUBGRAPH_NAME: &str = "my-subgraph";

/// Settings file structure
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Base URL of the Graph Node HTTP server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How long to wait for the subgraph to become ready
    #[serde(default = "default_max_wait")]
    pub max_wait_secs: u64,

    /// Delay between readiness probes
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Per-request timeout for test queries (unbounded when absent)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_max_wait() -> u64 {
    120
}
fn default_poll_interval() -> u64 {
    2000
}

impl SettingsFile {
    /// Load settings from the default settings file
    ///
    /// Returns default settings if the file doesn't exist
    pub fn load() -> Result<Self> {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::with_defaults()),
        }
    }

    /// Load settings from an explicit path, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::with_defaults());
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;
        toml::from_str(&content).map_err(|e| Error::SettingsParse(e.to_string()))
    }

    fn with_defaults() -> Self {
        Self {
            base_url: default_base_url(),
            max_wait_secs: default_max_wait(),
            poll_interval_ms: default_poll_interval(),
            request_timeout_secs: None,
        }
    }
}

/// Resolved settings for a single run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the JSON test configuration
    pub config_path: PathBuf,
    /// Name of the deployed subgraph under test
    pub subgraph_name: String,
    /// Base URL of the Graph Node HTTP server
    pub base_url: String,
    /// Overall readiness budget
    pub max_wait: Duration,
    /// Delay between readiness probes
    pub poll_interval: Duration,
    /// Optional bound on every HTTP request
    pub request_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_file(SettingsFile::with_defaults())
    }
}

impl Settings {
    /// Build settings from a loaded settings file
    pub fn from_file(file: SettingsFile) -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            subgraph_name: DEFAULT_SUBGRAPH_NAME.to_string(),
            base_url: file.base_url,
            max_wait: Duration::from_secs(file.max_wait_secs),
            poll_interval: Duration::from_millis(file.poll_interval_ms),
            request_timeout: file.request_timeout_secs.map(Duration::from_secs),
        }
    }

    /// GraphQL endpoint of the subgraph under test
    pub fn endpoint(&self) -> String {
        format!(
            "{}/subgraphs/name/{}",
            self.base_url.trim_end_matches('/'),
            self.subgraph_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let settings = Settings::default();
        assert_eq!(
            settings.endpoint(),
            "http://localhost:8000/subgraphs/name/my-subgraph"
        );
        assert_eq!(settings.max_wait, Duration::from_secs(120));
        assert_eq!(settings.poll_interval, Duration::from_millis(2000));
        assert!(settings.request_timeout.is_none());
        assert_eq!(settings.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let settings = Settings {
            base_url: "http://graph-node:8000/".to_string(),
            subgraph_name: "uniswap".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.endpoint(),
            "http://graph-node:8000/subgraphs/name/uniswap"
        );
    }

    #[test]
    fn test_missing_settings_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = SettingsFile::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(file.base_url, "http://localhost:8000");
        assert_eq!(file.max_wait_secs, 120);
        assert_eq!(file.poll_interval_ms, 2000);
    }

    #[test]
    fn test_partial_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_wait_secs = 30\nrequest_timeout_secs = 10\n").unwrap();

        let settings = Settings::from_file(SettingsFile::load_from(&path).unwrap());
        assert_eq!(settings.max_wait, Duration::from_secs(30));
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(10)));
        assert_eq!(settings.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_invalid_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_wait_secs = \"soon\"\n").unwrap();

        let err = SettingsFile::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::SettingsParse(_)));
    }
}
