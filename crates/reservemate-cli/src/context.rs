// crates/reservemate-cli/src/context.rs - Application wiring for command handlers
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use reservemate_core::config::DEFAULT_CONFIG_FILE;
use reservemate_core::sample::sample_reserve_mate;
use reservemate_core::{
    AppConfig, Clock, ConfigManager, JsonReserveMateStorage, JsonUserPrefsStorage, LogicManager,
    ModelManager, ReserveMate, ReserveMateStorage, SchedulePolicy, StorageManager, UserPrefs,
    UserPrefsStorage,
};

/// Application context that gets passed to command handlers
///
/// Owns the loaded configuration and the logic facade built from it.
pub struct Context {
    config: AppConfig,
    config_path: PathBuf,
    allow_past: bool,
    prefs_storage: JsonUserPrefsStorage,
    stored_data_path: PathBuf,
    logic: LogicManager,
}

impl Context {
    /// Load preferences and reservation data, then build the logic facade
    ///
    /// STARTUP RULES:
    /// - missing or unreadable preferences fall back to defaults
    /// - a missing data file starts from sample reservations
    /// - an unreadable data file starts from an empty book
    /// - `data_path` applies to this run and is never written to preferences
    pub fn new(
        config: AppConfig,
        config_path: Option<PathBuf>,
        data_path: Option<PathBuf>,
        allow_past: bool,
    ) -> Self {
        let prefs_storage = JsonUserPrefsStorage::new(&config.user_prefs_file_path);
        let mut user_prefs = load_user_prefs(&prefs_storage);
        let stored_data_path = user_prefs.reserve_mate_file_path.clone();
        if let Some(path) = data_path {
            user_prefs.reserve_mate_file_path = path;
        }

        let storage = StorageManager::new(
            JsonReserveMateStorage::new(&user_prefs.reserve_mate_file_path),
            prefs_storage.clone(),
        );
        let reserve_mate = load_reserve_mate(&storage);

        let policy = SchedulePolicy::new(
            config.reject_past_reservations && !allow_past,
            Clock::System,
        );
        let logic = LogicManager::new(
            ModelManager::new(reserve_mate, user_prefs),
            Box::new(storage),
            policy,
        );

        Self {
            config,
            config_path: config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
            allow_past,
            prefs_storage,
            stored_data_path,
            logic,
        }
    }

    pub fn logic(&self) -> &LogicManager {
        &self.logic
    }

    pub fn logic_mut(&mut self) -> &mut LogicManager {
        &mut self.logic
    }

    /// Whether add and edit refuse past date-times in this run
    pub fn rejects_past(&self) -> bool {
        self.config.reject_past_reservations && !self.allow_past
    }

    /// Write a config file with every field filled in, if none exists yet
    pub fn ensure_config_file(&self) -> Result<()> {
        if self.config_path.exists() {
            return Ok(());
        }
        ConfigManager::save_config(&self.config, &self.config_path).with_context(|| {
            format!("Failed to write config file {}", self.config_path.display())
        })
    }

    /// Persist user preferences before the process ends
    ///
    /// The data file path is saved as it was loaded, ignoring `--data`.
    pub fn shutdown(&self) -> Result<()> {
        tracing::info!("saving preferences and shutting down");
        let prefs = UserPrefs {
            reserve_mate_file_path: self.stored_data_path.clone(),
            ..self.logic.user_prefs().clone()
        };
        self.prefs_storage.save_user_prefs(&prefs).with_context(|| {
            format!(
                "Failed to save preferences to {}",
                self.config.user_prefs_file_path.display()
            )
        })
    }
}

fn load_user_prefs(storage: &JsonUserPrefsStorage) -> UserPrefs {
    match storage.read_user_prefs() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            tracing::info!(
                path = %storage.user_prefs_file_path().display(),
                "preferences file not found, using defaults"
            );
            UserPrefs::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "preferences could not be loaded, using defaults");
            UserPrefs::default()
        }
    }
}

fn load_reserve_mate(storage: &StorageManager) -> ReserveMate {
    match storage.read_reserve_mate() {
        Ok(Some(book)) => book,
        Ok(None) => {
            tracing::info!(
                path = %storage.reserve_mate_file_path().display(),
                "data file not found, starting with sample reservations"
            );
            sample_reserve_mate()
        }
        Err(e) => {
            tracing::warn!(error = %e, "data file could not be loaded, starting with an empty book");
            ReserveMate::new()
        }
    }
}
