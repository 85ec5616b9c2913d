// crates/reservemate-core/src/config.rs - Configuration and user preferences
//
// Two persisted records live here:
// - AppConfig: how the application runs (log level, where prefs live,
//   whether past bookings are rejected). Read at startup, never edited by
//   commands.
// - UserPrefs: window geometry and the reservation data file path. Loaded
//   at startup, saved at shutdown.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--data, --allow-past)
// 2. Environment variables (RESERVEMATE_LOG, RESERVEMATE_PREFS, RESERVEMATE_ALLOW_PAST)
// 3. Config file (config.json, or the path passed with --config)
// 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid JSON in {file}: {error}")]
    Parse { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    Validation(String),

    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Minimum tracing level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Where user preferences are read from and saved to
    #[serde(default = "default_user_prefs_file_path")]
    pub user_prefs_file_path: PathBuf,

    /// Whether add/edit refuse date-times earlier than now
    #[serde(default = "default_true")]
    pub reject_past_reservations: bool,
}

/// Window geometry carried over from the desktop front end
///
/// The terminal front end does not use these values but keeps them intact
/// so a preferences file shared with a graphical client survives a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiSettings {
    #[serde(default = "default_window_width")]
    pub window_width: f64,

    #[serde(default = "default_window_height")]
    pub window_height: f64,

    #[serde(default)]
    pub window_x: Option<i32>,

    #[serde(default)]
    pub window_y: Option<i32>,
}

/// Per-user preferences persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefs {
    #[serde(default)]
    pub gui_settings: GuiSettings,

    #[serde(default = "default_reserve_mate_file_path")]
    pub reserve_mate_file_path: PathBuf,
}

/// Loads, layers and validates `AppConfig`
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from file and environment
    ///
    /// LOADING STRATEGY:
    /// 1. Start with built-in defaults
    /// 2. Replace with the config file, if one exists
    /// 3. Apply environment variable overrides
    /// 4. Validate
    ///
    /// A missing config file is not an error. Invalid JSON is.
    pub fn load_config(config_path: Option<&Path>) -> ConfigResult<AppConfig> {
        let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));

        let mut config = Self::try_load_file(path)?.unwrap_or_default();
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok());
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Write the config back so missing files or fields get filled in
    pub fn save_config(config: &AppConfig, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config).map_err(|e| ConfigError::Parse {
            file: path.display().to_string(),
            error: e.to_string(),
        })?;
        fs::write(path, content)?;
        Ok(())
    }

    fn try_load_file(path: &Path) -> ConfigResult<Option<AppConfig>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            file: path.display().to_string(),
            error: e.to_string(),
        })?;

        Ok(Some(config))
    }

    /// Apply environment overrides using `lookup` to read variables
    ///
    /// - RESERVEMATE_LOG -> log_level
    /// - RESERVEMATE_PREFS -> user_prefs_file_path
    /// - RESERVEMATE_ALLOW_PAST -> reject_past_reservations (inverted; "1"/"true" allow)
    pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("RESERVEMATE_LOG") {
            config.log_level = level.to_lowercase();
        }

        if let Some(path) = lookup("RESERVEMATE_PREFS") {
            config.user_prefs_file_path = PathBuf::from(path);
        }

        if let Some(flag) = lookup("RESERVEMATE_ALLOW_PAST") {
            let allow = matches!(flag.trim().to_lowercase().as_str(), "1" | "true" | "yes");
            config.reject_past_reservations = !allow;
        }
    }

    pub fn validate_config(config: &AppConfig) -> ConfigResult<()> {
        if !VALID_LOG_LEVELS.contains(&config.log_level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Invalid logLevel '{}'. Must be one of: {}",
                config.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        if config.user_prefs_file_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "userPrefsFilePath cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_user_prefs_file_path() -> PathBuf {
    PathBuf::from("preferences.json")
}

fn default_reserve_mate_file_path() -> PathBuf {
    PathBuf::from("data").join("reservemate.json")
}

fn default_window_width() -> f64 {
    740.0
}

fn default_window_height() -> f64 {
    600.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            user_prefs_file_path: default_user_prefs_file_path(),
            reject_past_reservations: true,
        }
    }
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            window_x: None,
            window_y: None,
        }
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            reserve_mate_file_path: default_reserve_mate_file_path(),
        }
    }
}
