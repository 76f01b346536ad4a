//! Error types for kerb-sync.

use std::path::PathBuf;

use thiserror::Error;

use kerb_core::KerbError;

/// All errors that can arise from mirror sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Scanning or classifying a tree failed.
    #[error("scan error: {0}")]
    Scan(#[from] KerbError),

    /// An I/O error (delete, create directory, copy), with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scanned file could not be expressed relative to the source root.
    #[error("{path} is not inside the sync source")]
    OutsideSource { path: PathBuf },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
