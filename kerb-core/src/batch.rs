//! Per-file results for continue-on-error operations.
//!
//! Tree-wide header addition and tree-wide replace never abort on a single
//! file's failure. They hand back a [`BatchReport`] instead, and the caller
//! decides how to surface each failure.
//!
//! A traversal error that stops a batch part-way is kept on the report next
//! to the files already processed, see [`BatchReport::interruption`].

use std::path::{Path, PathBuf};

use crate::error::KerbError;

/// Result of one file within a batch.
#[derive(Debug)]
pub struct FileOutcome<T> {
    pub path: PathBuf,
    pub result: Result<T, KerbError>,
}

/// Ordered per-file results of a batch operation, in traversal order.
#[derive(Debug)]
pub struct BatchReport<T> {
    outcomes: Vec<FileOutcome<T>>,
    interruption: Option<KerbError>,
}

impl<T> BatchReport<T> {
    /// A batch cut short by `err` after `outcomes` were already recorded.
    pub(crate) fn interrupted<I>(outcomes: I, err: KerbError) -> Self
    where
        I: IntoIterator<Item = (PathBuf, Result<T, KerbError>)>,
    {
        let mut report: Self = outcomes.into_iter().collect();
        report.interruption = Some(err);
        report
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// `true` when no file in the batch failed and the batch ran to the end.
    pub fn is_clean(&self) -> bool {
        self.interruption.is_none() && self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// The error that stopped the batch before every file was visited.
    pub fn interruption(&self) -> Option<&KerbError> {
        self.interruption.as_ref()
    }

    pub fn into_interruption(self) -> Option<KerbError> {
        self.interruption
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileOutcome<T>> {
        self.outcomes.iter()
    }

    /// Files that were processed successfully, with their outcome.
    pub fn succeeded(&self) -> impl Iterator<Item = (&Path, &T)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|v| (o.path.as_path(), v)))
    }

    /// Files that failed, with the error that stopped them.
    pub fn failed(&self) -> impl Iterator<Item = (&Path, &KerbError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.path.as_path(), e)))
    }
}

impl<T> Default for BatchReport<T> {
    fn default() -> Self {
        Self {
            outcomes: Vec::new(),
            interruption: None,
        }
    }
}

impl<T> FromIterator<(PathBuf, Result<T, KerbError>)> for BatchReport<T> {
    fn from_iter<I: IntoIterator<Item = (PathBuf, Result<T, KerbError>)>>(iter: I) -> Self {
        Self {
            outcomes: iter
                .into_iter()
                .map(|(path, result)| FileOutcome { path, result })
                .collect(),
            interruption: None,
        }
    }
}

impl<T> IntoIterator for BatchReport<T> {
    type Item = FileOutcome<T>;
    type IntoIter = std::vec::IntoIter<FileOutcome<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BatchReport<T> {
    type Item = &'a FileOutcome<T>;
    type IntoIter = std::slice::Iter<'a, FileOutcome<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(path: &str) -> KerbError {
        KerbError::Io {
            path: PathBuf::from(path),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
    }

    #[test]
    fn partitions_successes_and_failures_in_order() {
        let report: BatchReport<u8> = vec![
            (PathBuf::from("a"), Ok(1)),
            (PathBuf::from("b"), Err(failure("b"))),
            (PathBuf::from("c"), Ok(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(report.len(), 3);
        assert!(!report.is_clean());
        let ok: Vec<_> = report.succeeded().map(|(p, v)| (p.to_path_buf(), *v)).collect();
        assert_eq!(ok, vec![(PathBuf::from("a"), 1), (PathBuf::from("c"), 3)]);
        let failed: Vec<_> = report.failed().map(|(p, _)| p.to_path_buf()).collect();
        assert_eq!(failed, vec![PathBuf::from("b")]);
    }

    #[test]
    fn empty_report_is_clean() {
        let report = BatchReport::<()>::default();
        assert!(report.is_empty());
        assert!(report.is_clean());
        assert!(report.interruption().is_none());
    }

    #[test]
    fn interrupted_report_keeps_finished_files() {
        let report = BatchReport::interrupted(vec![(PathBuf::from("a"), Ok(1u8))], failure("b"));

        assert_eq!(report.len(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.succeeded().count(), 1);
        assert_eq!(
            report.interruption().and_then(KerbError::path),
            Some(Path::new("b"))
        );
        assert!(report.into_interruption().is_some());
    }
}
