/// Error types for scanning and catalog I/O.
use std::path::PathBuf;
use thiserror::Error;

/// Failure while scanning a root directory for models.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("folder '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    /// The scan root exists but is a file (or something else) rather than a directory.
    #[error("'{}' is not a folder", .0.display())]
    NotADirectory(PathBuf),

    /// The directory walk failed part-way through (permission denied, I/O error).
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] jwalk::Error),
}

/// Failure while writing or reading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}
