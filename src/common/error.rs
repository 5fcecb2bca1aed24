//! Error types for the subgraph test runner
//!
//! Only errors that end the whole run live here. Failures of a single test
//! case are [`crate::testing::TestFailure`] and are recorded, not propagated.

use std::time::Duration;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the test runner
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Failed to parse config file: {0}")]
    ConfigParse(String),

    #[error("Invalid settings file: {0}")]
    SettingsParse(String),

    // === Readiness Errors ===
    #[error("Timeout waiting for subgraph after {waited_secs}s")]
    ReadinessTimeout { waited_secs: u64 },

    // === Transport Errors ===
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // === IO Errors ===
    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a readiness timeout error from the time actually waited
    pub fn readiness_timeout(waited: Duration) -> Self {
        Self::ReadinessTimeout {
            waited_secs: waited.as_secs(),
        }
    }

    /// Create a file read error for a path
    pub fn file_read(path: &std::path::Path, error: impl ToString) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Whether this error came from the test configuration file
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::ConfigParse(_))
    }
}
