//! Loading and saving the edited file.
//!
//! The whole file is read at startup and written back in one call; there is
//! no partial or incremental I/O.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File I/O failures. Any of these ends the editing session.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to stat {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to restore permissions on {}", path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the file at `path`, creating it empty if it does not exist.
///
/// # Errors
/// Returns [`StorageError`] for any I/O failure other than "not found".
pub fn load(path: &Path) -> Result<String, StorageError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "creating new file");
            fs::File::create(path).map_err(|source| StorageError::Create {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(String::new())
        }
        Err(source) => Err(StorageError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `text` to `path`, keeping the existing file's permission mode.
///
/// A file that vanished since it was loaded is recreated with default
/// permissions.
///
/// # Errors
/// Returns [`StorageError`] if the file cannot be inspected or written.
pub fn save(path: &Path, text: &str) -> Result<(), StorageError> {
    let permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(source) => {
            return Err(StorageError::Metadata {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    fs::write(path, text).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(permissions) = permissions {
        fs::set_permissions(path, permissions).map_err(|source| StorageError::Permissions {
            path: path.to_path_buf(),
            source,
        })?;
    }
    tracing::debug!(path = %path.display(), bytes = text.len(), "saved file");
    Ok(())
}
