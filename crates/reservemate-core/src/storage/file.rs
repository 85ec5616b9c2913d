// crates/reservemate-core/src/storage/file.rs - JSON file helpers

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use super::{DataLoadingError, StorageResult};

/// Deserialize `path`, or `Ok(None)` if there is no such file
pub(super) fn read_json<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "data file not found");
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| DataLoadingError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| DataLoadingError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Serialize `value` as pretty JSON, replacing `path` in one rename
///
/// Missing parent directories are created.
pub(super) fn write_json<T: Serialize>(value: &T, path: &Path) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut temp, value)?;
    temp.write_all(b"\n")?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
