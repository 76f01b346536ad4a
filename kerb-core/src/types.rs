//! Domain types shared by every kerb operation.
//!
//! Paths are always `PathBuf`/`&Path`; file content is always raw bytes so
//! non-UTF-8 files classify and mutate without lossy conversion.

use std::fmt;

// ---------------------------------------------------------------------------
// Sentinel
// ---------------------------------------------------------------------------

/// The line that marks a file as managed by kerb.
pub const DEFAULT_SENTINEL: &str = "# This file is managed by kerb. DO NOT EDIT.";

/// A single line of text identifying managed files, matched byte-for-byte.
///
/// Every core operation takes the sentinel explicitly. The binary only ever
/// uses [`Sentinel::default`]; tests construct alternate markers with
/// [`Sentinel::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentinel(String);

impl Sentinel {
    /// Build a sentinel from one line of text.
    ///
    /// Returns `None` for an empty string or text containing a line
    /// terminator: neither can be inserted and removed as a single line.
    pub fn new(line: impl Into<String>) -> Option<Self> {
        let line = line.into();
        if line.is_empty() || line.contains(|c: char| c == '\n' || c == '\r') {
            return None;
        }
        Some(Self(line))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Default for Sentinel {
    fn default() -> Self {
        Self(DEFAULT_SENTINEL.to_owned())
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Mutation outcomes
// ---------------------------------------------------------------------------

/// What a header insertion or removal did to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOutcome {
    /// The sentinel line was prepended and the file rewritten.
    Inserted,
    /// The leading sentinel line was stripped and the file rewritten.
    Removed,
    /// Nothing to do; the file was not written.
    Unchanged,
}

/// What a scoped replacement did to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The file is managed and was rewritten.
    Replaced { occurrences: usize },
    /// The file is not managed; it was left untouched.
    Skipped,
}
