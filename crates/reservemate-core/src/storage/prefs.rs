// crates/reservemate-core/src/storage/prefs.rs - User preferences <-> JSON

use std::io;
use std::path::{Path, PathBuf};

use super::file::{read_json, write_json};
use super::{StorageResult, UserPrefsStorage};
use crate::config::UserPrefs;

/// Stores `UserPrefs` as a camelCase JSON file
#[derive(Debug, Clone)]
pub struct JsonUserPrefsStorage {
    file_path: PathBuf,
}

impl JsonUserPrefsStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn read_user_prefs_from(&self, path: &Path) -> StorageResult<Option<UserPrefs>> {
        read_json(path)
    }
}

impl UserPrefsStorage for JsonUserPrefsStorage {
    fn user_prefs_file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>> {
        self.read_user_prefs_from(&self.file_path)
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> io::Result<()> {
        write_json(user_prefs, &self.file_path)
    }
}
