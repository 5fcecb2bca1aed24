//! Platform-specific paths for the user settings file

use std::path::PathBuf;

/// Application name used for platform directories
pub const APP_NAME: &str = "subgraph-tester";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/subgraph-tester/`
/// - macOS: `~/Library/Application Support/subgraph-tester/`
/// - Windows: `%APPDATA%\subgraph-tester\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the settings file
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
