//! Scoped find/replace over managed files.
//!
//! Replacement only ever touches files the classifier accepts; everything
//! else is reported as [`ReplaceOutcome::Skipped`] and left byte-identical.

use std::path::{Path, PathBuf};

use crate::batch::BatchReport;
use crate::error::{io_err, KerbError};
use crate::header::has_header_anywhere;
use crate::scan::list_managed;
use crate::types::{ReplaceOutcome, Sentinel};

/// Position of the first occurrence of `needle` in `haystack`.
///
/// An empty needle matches at offset 0.
pub(crate) fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Replace every non-overlapping occurrence of `old` with `new`.
///
/// Scans strictly left to right and resumes after each match, so `"aaaa"`
/// with `"aa"` → `"b"` yields `"bb"`. An empty `old` matches nothing.
/// Returns the rewritten content and the number of replacements made.
pub fn replace_bytes(content: &[u8], old: &[u8], new: &[u8]) -> (Vec<u8>, usize) {
    if old.is_empty() {
        return (content.to_vec(), 0);
    }

    let mut out = Vec::with_capacity(content.len());
    let mut rest = content;
    let mut occurrences = 0;
    while let Some(at) = find_bytes(rest, old) {
        out.extend_from_slice(&rest[..at]);
        out.extend_from_slice(new);
        rest = &rest[at + old.len()..];
        occurrences += 1;
    }
    out.extend_from_slice(rest);
    (out, occurrences)
}

/// Replace `old` with `new` in the file at `path` if, and only if, it is managed.
///
/// An unmanaged file is a silent no-op, not an error. A managed file is
/// rewritten in full even when `old` does not occur.
pub fn replace_in_file(
    path: &Path,
    old: &str,
    new: &str,
    sentinel: &Sentinel,
) -> Result<ReplaceOutcome, KerbError> {
    let content = std::fs::read(path).map_err(|e| io_err(path, e))?;
    if !has_header_anywhere(&content, sentinel) {
        tracing::debug!("not managed, skipping replace: {}", path.display());
        return Ok(ReplaceOutcome::Skipped);
    }

    let (replaced, occurrences) = replace_bytes(&content, old.as_bytes(), new.as_bytes());
    std::fs::write(path, replaced).map_err(|e| io_err(path, e))?;

    tracing::info!("replaced {occurrences} occurrence(s) in: {}", path.display());
    Ok(ReplaceOutcome::Replaced { occurrences })
}

/// Run [`replace_in_file`] over every managed file under `root`.
///
/// Listing is fail-fast: any traversal or read error while classifying
/// aborts before a single file is touched. Once the managed set is known,
/// per-file failures are collected and the remaining files still processed.
pub fn replace_all_managed(
    root: &Path,
    old: &str,
    new: &str,
    sentinel: &Sentinel,
) -> Result<BatchReport<ReplaceOutcome>, KerbError> {
    let files = list_managed(root, sentinel)?;
    Ok(replace_each(files, old, new, sentinel))
}

fn replace_each(
    files: Vec<PathBuf>,
    old: &str,
    new: &str,
    sentinel: &Sentinel,
) -> BatchReport<ReplaceOutcome> {
    files
        .into_iter()
        .map(|path| {
            let result = replace_in_file(&path, old, new, sentinel);
            if let Err(err) = &result {
                tracing::warn!("replace failed for {}: {err}", path.display());
            }
            (path, result)
        })
        .collect()
}
