//! File system abstraction port.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// File not found.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Other I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction over the handful of file operations the session store needs,
/// kept narrow so tests can substitute an in-memory implementation.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Reads a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    async fn read_to_string(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Writes bytes to a file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    async fn write(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError>;

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError::NotFound`] if the file does not exist.
    async fn remove_file(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Returns true if `path` exists.
    async fn exists(&self, path: &Path) -> bool;
}
