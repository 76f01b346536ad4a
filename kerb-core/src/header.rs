//! Sentinel classification and header insertion/removal.
//!
//! Two predicates coexist on purpose:
//!
//! - [`has_header_anywhere`] decides whether a file is *managed*. Listing,
//!   sync, and replace all go through it.
//! - [`has_header_as_prefix`] only decides whether [`insert_header`] has
//!   anything to do.
//!
//! A file whose sentinel sits mid-content is therefore managed, yet
//! inserting a header into it still prepends a second copy.

use std::path::Path;

use crate::batch::BatchReport;
use crate::content::find_bytes;
use crate::error::{io_err, KerbError};
use crate::scan::walk;
use crate::types::{HeaderOutcome, Sentinel};

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// `true` iff the sentinel bytes occur anywhere in `content`.
pub fn has_header_anywhere(content: &[u8], sentinel: &Sentinel) -> bool {
    find_bytes(content, sentinel.as_bytes()).is_some()
}

/// `true` iff `content` begins with exactly the sentinel bytes.
pub fn has_header_as_prefix(content: &[u8], sentinel: &Sentinel) -> bool {
    content.starts_with(sentinel.as_bytes())
}

/// Read the file at `path` and report whether it is managed.
///
/// Read failures are returned, never treated as "not managed".
pub fn has_header(path: &Path, sentinel: &Sentinel) -> Result<bool, KerbError> {
    let content = std::fs::read(path).map_err(|e| io_err(path, e))?;
    Ok(has_header_anywhere(&content, sentinel))
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

/// Prepend the sentinel line to the file at `path`.
///
/// A file that already starts with the sentinel is left alone and not
/// written. Otherwise the whole file is rewritten as
/// `sentinel + "\n" + original`.
pub fn insert_header(path: &Path, sentinel: &Sentinel) -> Result<HeaderOutcome, KerbError> {
    let content = std::fs::read(path).map_err(|e| io_err(path, e))?;
    if has_header_as_prefix(&content, sentinel) {
        tracing::debug!("header already leading: {}", path.display());
        return Ok(HeaderOutcome::Unchanged);
    }

    let mut updated = Vec::with_capacity(sentinel.as_bytes().len() + 1 + content.len());
    updated.extend_from_slice(sentinel.as_bytes());
    updated.push(b'\n');
    updated.extend_from_slice(&content);
    std::fs::write(path, updated).map_err(|e| io_err(path, e))?;

    tracing::info!("header inserted: {}", path.display());
    Ok(HeaderOutcome::Inserted)
}

/// Unconditionally add the header to a single file.
///
/// No classification happens first: binary and never-managed files get a
/// header too. Same contract as [`insert_header`].
pub fn add_header_to_one(path: &Path, sentinel: &Sentinel) -> Result<HeaderOutcome, KerbError> {
    insert_header(path, sentinel)
}

/// Add the header to every file under `root`.
///
/// A failure on an individual file is recorded in the report and the walk
/// carries on. A traversal error stops the walk; files already handled stay
/// in the report and the error is available through
/// [`BatchReport::interruption`].
pub fn add_header_to_tree(root: &Path, sentinel: &Sentinel) -> BatchReport<HeaderOutcome> {
    let mut outcomes = Vec::new();
    for path in walk(root) {
        let path = match path {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("walk of {} stopped: {err}", root.display());
                return BatchReport::interrupted(outcomes, err);
            }
        };
        let result = add_header_to_one(&path, sentinel);
        if let Err(err) = &result {
            tracing::warn!("header insertion failed for {}: {err}", path.display());
        }
        outcomes.push((path, result));
    }
    outcomes.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

/// Length of the leading sentinel line, terminator included.
///
/// The first line must be exactly the sentinel, ended by `\n`, `\r\n`, or
/// end of file. Anything else (sentinel absent, further down, or followed
/// by more text on the same line) yields `None`.
fn leading_header_len(content: &[u8], sentinel: &Sentinel) -> Option<usize> {
    if !has_header_as_prefix(content, sentinel) {
        return None;
    }
    let len = sentinel.as_bytes().len();
    match &content[len..] {
        [] => Some(len),
        [b'\n', ..] => Some(len + 1),
        [b'\r', b'\n', ..] => Some(len + 2),
        _ => None,
    }
}

/// Strip the sentinel from the file at `path` when it is the first line.
///
/// Only the first line is ever examined or removed; sentinels elsewhere in
/// the file stay where they are and the file is not written.
pub fn remove_header(path: &Path, sentinel: &Sentinel) -> Result<HeaderOutcome, KerbError> {
    let content = std::fs::read(path).map_err(|e| io_err(path, e))?;
    let Some(len) = leading_header_len(&content, sentinel) else {
        tracing::debug!("no leading header: {}", path.display());
        return Ok(HeaderOutcome::Unchanged);
    };

    std::fs::write(path, &content[len..]).map_err(|e| io_err(path, e))?;

    tracing::info!("header removed: {}", path.display());
    Ok(HeaderOutcome::Removed)
}
