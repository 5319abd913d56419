//! Vault file I/O: scanning, reads, atomic writes, folder creation.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Errors during file system operations on the vault.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("a file occupies the folder path: {path}")]
    FolderConflict { path: PathBuf },

    #[error("invalid encoding in {path}: not valid UTF-8")]
    InvalidEncoding { path: PathBuf },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Scans a vault directory recursively for markdown (`.md`) files.
///
/// Skips dot-hidden files and directories. Returns paths relative to the
/// vault root, in walk order.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
pub fn scan_vault(dir: &Path) -> Result<Vec<PathBuf>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let files = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_dot_hidden(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(has_md_extension)
        .map(|e| e.path().strip_prefix(dir).unwrap_or(e.path()).to_path_buf())
        .collect();

    Ok(files)
}

fn is_dot_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_md_extension(entry: &DirEntry) -> bool {
    entry.path().extension().is_some_and(|e| e == "md")
}

/// Reads a file to a string.
///
/// # Errors
///
/// Returns `FsError::NotFound`, `FsError::PermissionDenied`, or
/// `FsError::Io` per the underlying failure, and `FsError::InvalidEncoding`
/// for non-UTF-8 content.
pub fn read_to_string(path: &Path) -> Result<String, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    String::from_utf8(bytes).map_err(|_| FsError::InvalidEncoding { path: path.into() })
}

/// Writes content to a path atomically.
///
/// Uses a temporary file in the target directory and an atomic rename so a
/// reader never observes a partial write. The parent directory must exist.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), FsError> {
    let parent = path.parent().ok_or_else(|| FsError::NotFound {
        path: path.into(),
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(content.as_bytes()).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Ensures a directory exists, creating it recursively if missing.
///
/// # Errors
///
/// Returns `FsError::FolderConflict` when a non-directory file occupies
/// the path (or any ancestor of it).
pub fn ensure_dir(path: &Path) -> Result<(), FsError> {
    for ancestor in path.ancestors().collect::<Vec<_>>().into_iter().rev() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        if ancestor.exists() && !ancestor.is_dir() {
            return Err(FsError::FolderConflict {
                path: ancestor.to_path_buf(),
            });
        }
    }
    std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
}

/// Copies a file, failing if the source is missing or unreadable.
pub fn copy_file(from: &Path, to: &Path) -> Result<(), FsError> {
    std::fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| FsError::from_io(from, e))
}
