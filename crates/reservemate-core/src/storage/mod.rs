// crates/reservemate-core/src/storage/mod.rs - Persisting the reservation book and preferences
//
// Both files are JSON. Reads are all-or-nothing: one bad record fails the
// whole load. Writes replace the file wholesale through a temporary file in
// the same directory, so a crash mid-write leaves the previous file intact.
//
// MODULE ORGANIZATION:
// - file:  shared read/write helpers
// - json:  reservation book codec
// - prefs: user preferences codec

mod file;
pub mod json;
pub mod prefs;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::UserPrefs;
use crate::model::ReserveMate;

pub use json::JsonReserveMateStorage;
pub use prefs::JsonUserPrefsStorage;

/// A data file exists but could not be turned into a model
#[derive(Error, Debug)]
pub enum DataLoadingError {
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON for this file: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("Illegal value in {}: {message}", .path.display())]
    IllegalValue { path: PathBuf, message: String },
}

/// Result type for storage reads
pub type StorageResult<T> = Result<T, DataLoadingError>;

/// Reads and writes the reservation book
pub trait ReserveMateStorage {
    /// Default location of the data file
    fn reserve_mate_file_path(&self) -> &Path;

    /// `Ok(None)` when the file does not exist
    fn read_reserve_mate_from(&self, path: &Path) -> StorageResult<Option<ReserveMate>>;

    fn save_reserve_mate_to(&self, reserve_mate: &ReserveMate, path: &Path) -> io::Result<()>;

    fn read_reserve_mate(&self) -> StorageResult<Option<ReserveMate>> {
        self.read_reserve_mate_from(self.reserve_mate_file_path())
    }

    fn save_reserve_mate(&self, reserve_mate: &ReserveMate) -> io::Result<()> {
        self.save_reserve_mate_to(reserve_mate, self.reserve_mate_file_path())
    }
}

/// Reads and writes user preferences
pub trait UserPrefsStorage {
    fn user_prefs_file_path(&self) -> &Path;

    /// `Ok(None)` when the file does not exist
    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>>;

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> io::Result<()>;
}

/// Everything the logic facade needs from persistence
pub trait Storage: ReserveMateStorage + UserPrefsStorage {}

impl<T: ReserveMateStorage + UserPrefsStorage> Storage for T {}

/// Combines the JSON book and preferences stores behind one value
#[derive(Debug, Clone)]
pub struct StorageManager {
    reserve_mate_storage: JsonReserveMateStorage,
    user_prefs_storage: JsonUserPrefsStorage,
}

impl StorageManager {
    pub fn new(
        reserve_mate_storage: JsonReserveMateStorage,
        user_prefs_storage: JsonUserPrefsStorage,
    ) -> Self {
        Self {
            reserve_mate_storage,
            user_prefs_storage,
        }
    }

    pub fn from_paths(data_path: impl Into<PathBuf>, prefs_path: impl Into<PathBuf>) -> Self {
        Self::new(
            JsonReserveMateStorage::new(data_path),
            JsonUserPrefsStorage::new(prefs_path),
        )
    }
}

impl ReserveMateStorage for StorageManager {
    fn reserve_mate_file_path(&self) -> &Path {
        self.reserve_mate_storage.reserve_mate_file_path()
    }

    fn read_reserve_mate_from(&self, path: &Path) -> StorageResult<Option<ReserveMate>> {
        tracing::debug!(path = %path.display(), "reading reservation data");
        self.reserve_mate_storage.read_reserve_mate_from(path)
    }

    fn save_reserve_mate_to(&self, reserve_mate: &ReserveMate, path: &Path) -> io::Result<()> {
        tracing::debug!(path = %path.display(), "writing reservation data");
        self.reserve_mate_storage
            .save_reserve_mate_to(reserve_mate, path)
    }
}

impl UserPrefsStorage for StorageManager {
    fn user_prefs_file_path(&self) -> &Path {
        self.user_prefs_storage.user_prefs_file_path()
    }

    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>> {
        self.user_prefs_storage.read_user_prefs()
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> io::Result<()> {
        self.user_prefs_storage.save_user_prefs(user_prefs)
    }
}
