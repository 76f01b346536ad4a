//! Recursive directory traversal.
//!
//! [`walk`] and [`find_managed`] are lazy iterators that yield traversal
//! and read failures as `Err` items instead of stopping on their own. The
//! consumer picks the policy: [`list_managed`] collects fail-fast, batch
//! operations keep going and record each failure.
//!
//! Order is lexicographic by file name at every directory level, so two
//! walks over an unchanged tree visit files identically.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{io_err, KerbError};
use crate::header::has_header_anywhere;
use crate::types::Sentinel;

/// Lazy iterator over every non-directory entry under a root.
///
/// Created by [`walk`].
pub struct Walk {
    inner: walkdir::IntoIter,
}

/// Walk `root` recursively, yielding every path that is not a directory.
///
/// Symbolic links are reported as entries and never descended into. When
/// `root` is itself a file, that single path is yielded.
pub fn walk(root: &Path) -> Walk {
    Walk {
        inner: WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter(),
    }
}

impl Iterator for Walk {
    type Item = Result<PathBuf, KerbError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) if entry.file_type().is_dir() => continue,
                Ok(entry) => return Some(Ok(entry.into_path())),
                Err(err) => return Some(Err(KerbError::Walk(err))),
            }
        }
    }
}

/// Lazy iterator over managed files under a root.
///
/// Created by [`find_managed`].
pub struct ManagedFiles<'s> {
    walk: Walk,
    sentinel: &'s Sentinel,
}

/// Walk `root` and yield only the files whose content contains `sentinel`.
///
/// Every file is read in full to classify it; a read failure is yielded as
/// an `Err` item carrying the file's path.
pub fn find_managed<'s>(root: &Path, sentinel: &'s Sentinel) -> ManagedFiles<'s> {
    ManagedFiles {
        walk: walk(root),
        sentinel,
    }
}

impl Iterator for ManagedFiles<'_> {
    type Item = Result<PathBuf, KerbError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = match self.walk.next()? {
                Ok(path) => path,
                Err(err) => return Some(Err(err)),
            };
            let content = match std::fs::read(&path) {
                Ok(content) => content,
                Err(err) => return Some(Err(io_err(path, err))),
            };
            if has_header_anywhere(&content, self.sentinel) {
                tracing::debug!("managed: {}", path.display());
                return Some(Ok(path));
            }
        }
    }
}

/// Collect every managed file under `root`, failing on the first error.
///
/// Partial results are discarded when any traversal or read error occurs.
pub fn list_managed(root: &Path, sentinel: &Sentinel) -> Result<Vec<PathBuf>, KerbError> {
    find_managed(root, sentinel).collect()
}
