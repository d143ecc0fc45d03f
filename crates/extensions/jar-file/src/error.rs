//! File jar errors.

use std::path::PathBuf;
use thiserror::Error;

use switcher_protocols::JarError;

/// Errors that can occur in file jar operations.
#[derive(Debug, Error)]
pub enum FileJarError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to (de)serialize the jar file.
    #[error("Jar file JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to create the directory holding the jar file.
    #[error("Failed to create jar directory at {path}: {reason}")]
    CreateDirFailed { path: PathBuf, reason: String },
}

impl From<FileJarError> for JarError {
    fn from(err: FileJarError) -> Self {
        match err {
            FileJarError::Io(e) => JarError::Io(e),
            FileJarError::Json(e) => JarError::Serialization(e.to_string()),
            other => JarError::Io(std::io::Error::other(other.to_string())),
        }
    }
}
