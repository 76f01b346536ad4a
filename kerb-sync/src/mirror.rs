//! Destructive one-directional mirror of managed files.
//!
//! ## `sync` — two phases
//!
//! 1. Cleanup: list managed files under the destination and delete each one.
//!    The first listing or deletion error aborts the whole sync.
//! 2. Copy (only after cleanup succeeded): list managed files under the
//!    source and copy each to the same relative path under the destination,
//!    creating parent directories and overwriting whatever is there.
//!
//! Nothing is rolled back. A failure during the copy phase leaves deleted
//! files deleted and copied files copied; the remaining sources are not
//! copied. Unmanaged destination files are never touched.

use std::fs::File;
use std::path::{Path, PathBuf};

use kerb_core::{list_managed, remove_header, BatchReport, HeaderOutcome, Sentinel};

use crate::error::{io_err, SyncError};

// ---------------------------------------------------------------------------
// Sync report
// ---------------------------------------------------------------------------

/// A single file copied from the source tree into the destination tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Outcome of a successful sync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Managed destination files deleted during cleanup, in traversal order.
    pub removed: Vec<PathBuf>,
    /// Managed source files copied, in traversal order.
    pub copied: Vec<CopiedFile>,
}

// ---------------------------------------------------------------------------
// sync
// ---------------------------------------------------------------------------

/// Replace every managed file under `destination_root` with the managed
/// files under `source_root`, keyed by relative path.
///
/// Both roots must exist. A missing destination root fails the cleanup
/// listing before anything is copied.
pub fn sync(
    source_root: &Path,
    destination_root: &Path,
    sentinel: &Sentinel,
) -> Result<SyncReport, SyncError> {
    let removed = clean_destination(destination_root, sentinel)?;
    let copied = copy_managed(source_root, destination_root, sentinel)?;

    tracing::info!(
        "synced {} -> {}: {} removed, {} copied",
        source_root.display(),
        destination_root.display(),
        removed.len(),
        copied.len()
    );
    Ok(SyncReport { removed, copied })
}

fn clean_destination(root: &Path, sentinel: &Sentinel) -> Result<Vec<PathBuf>, SyncError> {
    let managed = list_managed(root, sentinel)?;
    for path in &managed {
        std::fs::remove_file(path).map_err(|e| io_err(path, e))?;
        tracing::info!("removed: {}", path.display());
    }
    Ok(managed)
}

fn copy_managed(
    source_root: &Path,
    destination_root: &Path,
    sentinel: &Sentinel,
) -> Result<Vec<CopiedFile>, SyncError> {
    let managed = list_managed(source_root, sentinel)?;
    let mut copied = Vec::with_capacity(managed.len());

    for source in managed {
        let relative = source
            .strip_prefix(source_root)
            .map_err(|_| SyncError::OutsideSource {
                path: source.clone(),
            })?;
        let destination = destination_root.join(relative);

        if let Some(parent) = destination.parent() {
            create_dir_all(parent)?;
        }
        copy_bytes(&source, &destination)?;

        tracing::info!("copied: {} -> {}", source.display(), destination.display());
        copied.push(CopiedFile {
            source,
            destination,
        });
    }
    Ok(copied)
}

/// Copy file content only. The destination keeps (or gets) the default
/// creation mode; the source's permissions are not carried over.
fn copy_bytes(from: &Path, to: &Path) -> Result<u64, SyncError> {
    let mut reader = File::open(from).map_err(|e| io_err(from, e))?;
    let mut writer = File::create(to).map_err(|e| io_err(to, e))?;
    std::io::copy(&mut reader, &mut writer).map_err(|e| io_err(to, e))
}

#[cfg(unix)]
fn create_dir_all(dir: &Path) -> Result<(), SyncError> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(dir)
        .map_err(|e| io_err(dir, e))
}

#[cfg(not(unix))]
fn create_dir_all(dir: &Path) -> Result<(), SyncError> {
    std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))
}

// ---------------------------------------------------------------------------
// strip_headers
// ---------------------------------------------------------------------------

/// Remove the leading header from every managed file under `root`.
///
/// Meant to run after [`sync`] for callers that want synced files without
/// the marker. Listing is fail-fast; individual removal failures are
/// collected and the remaining files are still processed.
pub fn strip_headers(
    root: &Path,
    sentinel: &Sentinel,
) -> Result<BatchReport<HeaderOutcome>, SyncError> {
    let managed = list_managed(root, sentinel)?;
    Ok(strip_each(managed, sentinel))
}

fn strip_each(paths: Vec<PathBuf>, sentinel: &Sentinel) -> BatchReport<HeaderOutcome> {
    paths
        .into_iter()
        .map(|path| {
            let result = remove_header(&path, sentinel);
            if let Err(err) = &result {
                tracing::warn!("header removal failed for {}: {err}", path.display());
            }
            (path, result)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn managed(body: &str) -> String {
        format!("{}\n{body}", Sentinel::default())
    }

    #[test]
    fn missing_destination_fails_before_copy() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join("x"), managed("1")).unwrap();
        let target = dst.path().join("typo");

        let err = sync(src.path(), &target, &Sentinel::default()).unwrap_err();
        assert!(matches!(err, SyncError::Scan(_)), "got: {err}");
        assert!(!target.exists());
    }

    #[test]
    fn creates_nested_parent_directories() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let nested = src.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("c.txt"), managed("deep")).unwrap();

        sync(src.path(), dst.path(), &Sentinel::default()).unwrap();
        let copied = dst.path().join("a").join("b").join("c.txt");
        assert_eq!(fs::read_to_string(copied).unwrap(), managed("deep"));
    }

    #[test]
    fn report_pairs_source_with_destination() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join("x"), managed("1")).unwrap();
        fs::write(dst.path().join("stale"), managed("old")).unwrap();

        let report = sync(src.path(), dst.path(), &Sentinel::default()).unwrap();
        assert_eq!(report.removed, vec![dst.path().join("stale")]);
        assert_eq!(
            report.copied,
            vec![CopiedFile {
                source: src.path().join("x"),
                destination: dst.path().join("x"),
            }]
        );
    }

    #[test]
    fn missing_source_fails_after_cleanup() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(dst.path().join("stale"), managed("old")).unwrap();

        let err = sync(&src.path().join("missing"), dst.path(), &Sentinel::default())
            .unwrap_err();
        assert!(matches!(err, SyncError::Scan(_)), "got: {err}");
        assert!(!dst.path().join("stale").exists(), "cleanup is not rolled back");
    }

    #[test]
    fn strip_headers_removes_leading_marker_from_synced_files() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join("x"), managed("1")).unwrap();
        fs::write(src.path().join("y"), managed("2")).unwrap();

        sync(src.path(), dst.path(), &Sentinel::default()).unwrap();
        let report = strip_headers(dst.path(), &Sentinel::default()).unwrap();

        assert_eq!(report.len(), 2);
        assert!(report.succeeded().all(|(_, o)| *o == HeaderOutcome::Removed));
        assert_eq!(fs::read_to_string(dst.path().join("x")).unwrap(), "1");
        assert_eq!(fs::read_to_string(dst.path().join("y")).unwrap(), "2");
        assert_eq!(fs::read_to_string(src.path().join("x")).unwrap(), managed("1"));
    }

    #[test]
    fn strip_headers_leaves_mid_file_markers_alone() {
        let dst = TempDir::new().unwrap();
        let body = format!("intro\n{}\n", Sentinel::default());
        fs::write(dst.path().join("x"), &body).unwrap();

        let report = strip_headers(dst.path(), &Sentinel::default()).unwrap();
        let outcomes: Vec<_> = report.succeeded().map(|(_, o)| *o).collect();
        assert_eq!(outcomes, vec![HeaderOutcome::Unchanged]);
        assert_eq!(fs::read_to_string(dst.path().join("x")).unwrap(), body);
    }

    #[test]
    fn strip_continues_past_a_failed_file() {
        let dst = TempDir::new().unwrap();
        fs::write(dst.path().join("a"), managed("1")).unwrap();
        fs::write(dst.path().join("c"), managed("3")).unwrap();
        let paths = vec![
            dst.path().join("a"),
            dst.path().join("b-vanished"),
            dst.path().join("c"),
        ];

        let report = strip_each(paths, &Sentinel::default());
        assert_eq!(report.len(), 3);
        let failed: Vec<_> = report.failed().map(|(p, _)| p.to_path_buf()).collect();
        assert_eq!(failed, vec![dst.path().join("b-vanished")]);
        assert_eq!(fs::read_to_string(dst.path().join("a")).unwrap(), "1");
        assert_eq!(fs::read_to_string(dst.path().join("c")).unwrap(), "3");
    }
}
