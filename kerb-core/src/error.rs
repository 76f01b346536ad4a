//! Error types for kerb-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from classifying, scanning, or mutating files.
///
/// Classification never fails on its own; every variant comes from the
/// filesystem access a predicate or mutation depends on.
#[derive(Debug, Error)]
pub enum KerbError {
    /// An I/O error (open, read, write), with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed while descending or reading entries.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl KerbError {
    /// The path the failure is attributed to, when one is known.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            KerbError::Io { path, .. } => Some(path),
            KerbError::Walk(err) => err.path(),
        }
    }
}

/// Convenience constructor for [`KerbError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> KerbError {
    KerbError::Io {
        path: path.into(),
        source,
    }
}
