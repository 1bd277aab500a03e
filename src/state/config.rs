//! Application configuration.
//!
//! This module provides the [`AppConfig`] structure, read once at startup.
//!
//! # Configuration File Location
//!
//! The configuration file is read from:
//! - Linux: `~/.config/ledgerlens/config.json`
//! - macOS: `~/Library/Application Support/ledgerlens/config.json`
//! - Windows: `%APPDATA%/ledgerlens/config.json`
//!
//! Every field is optional. Command line arguments override file values.
//!
//! # Example
//!
//! ```json
//! {
//!   "dataset": "/home/me/ledger.json",
//!   "currency_symbol": "€",
//!   "log_file": "/tmp/ledgerlens.log"
//! }
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "ledgerlens";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Dataset opened when none is given on the command line.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    /// Symbol printed before amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// File that receives log output.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            currency_symbol: default_currency_symbol(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// Falls back to the defaults when the file is missing, unreadable or
    /// invalid. The second value explains a fallback that should be logged;
    /// it is returned rather than logged because the log file itself may come
    /// from this configuration.
    #[must_use]
    pub fn load() -> (Self, Option<String>) {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(err) => (
                Self::default(),
                Some(format!("Config path unavailable, using defaults: {err}")),
            ),
        }
    }

    /// Loads the configuration from `path` with the fallbacks of [`AppConfig::load`].
    #[must_use]
    pub fn load_from(path: &std::path::Path) -> (Self, Option<String>) {
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::try_load_from(path) {
            Ok(config) => (config, None),
            Err(err) => (
                Self::default(),
                Some(format!(
                    "Config load from {} failed, using defaults: {err}",
                    path.display()
                )),
            ),
        }
    }

    /// Attempts to load the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its JSON content
    /// cannot be parsed.
    pub fn try_load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses the configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON content cannot be parsed.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Applies command line overrides on top of the file values.
    #[must_use]
    pub fn with_overrides(mut self, dataset: Option<PathBuf>, log_file: Option<PathBuf>) -> Self {
        if dataset.is_some() {
            self.dataset = dataset;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.dataset, None);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = AppConfig {
            dataset: Some(PathBuf::from("/data/ledger.json")),
            currency_symbol: "€".to_string(),
            log_file: Some(PathBuf::from("/tmp/ledgerlens.log")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized = AppConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(AppConfig::from_json("{not json").is_err());
    }

    #[rstest]
    #[case::cli_wins(Some("cli.json"), Some("cli.json"))]
    #[case::file_kept(None, Some("file.json"))]
    fn test_dataset_override(#[case] cli: Option<&str>, #[case] expected: Option<&str>) {
        let config = AppConfig {
            dataset: Some(PathBuf::from("file.json")),
            ..AppConfig::default()
        };
        let merged = config.with_overrides(cli.map(PathBuf::from), None);
        assert_eq!(merged.dataset, expected.map(PathBuf::from));
    }

    #[test]
    fn test_log_file_override() {
        let merged =
            AppConfig::default().with_overrides(None, Some(PathBuf::from("/tmp/app.log")));
        assert_eq!(merged.log_file, Some(PathBuf::from("/tmp/app.log")));
    }

    #[test]
    fn test_try_load_from_missing_file() {
        assert!(AppConfig::try_load_from(std::path::Path::new("/no/such/config.json")).is_err());
    }

    #[test]
    fn test_load_from_missing_file_is_silent() {
        let (config, warning) = AppConfig::load_from(std::path::Path::new("/no/such/config.json"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(warning, None);
    }

    #[test]
    fn test_load_from_invalid_file_reports_fallback() {
        let path = std::env::temp_dir().join(format!(
            "ledgerlens-config-test-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{not json").unwrap();

        let (config, warning) = AppConfig::load_from(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(config, AppConfig::default());
        let warning = warning.unwrap();
        assert!(warning.contains("using defaults"));
        assert!(warning.contains(&path.display().to_string()));
    }

    #[test]
    fn test_load_from_valid_file() {
        let path = std::env::temp_dir().join(format!(
            "ledgerlens-config-valid-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"currency_symbol": "£"}"#).unwrap();

        let (config, warning) = AppConfig::load_from(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(config.currency_symbol, "£");
        assert_eq!(warning, None);
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }
}
