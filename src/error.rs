use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Error type covering the failure cases that can occur while copying the
/// README into the target source file.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the README or the target file does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when no line of the target file contains the marker.
    #[error("marker '{marker}' not found in {}", .path.display())]
    MarkerNotFound { marker: String, path: PathBuf },

    /// Raised when the end marker does not come after the start marker.
    #[error(
        "invalid region in {}: end marker on line {} is not after start marker on line {}",
        .path.display(),
        .end + 1,
        .start + 1
    )]
    InvalidRegion {
        start: usize,
        end: usize,
        path: PathBuf,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
