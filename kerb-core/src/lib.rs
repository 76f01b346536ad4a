//! kerb core library — sentinel classification, traversal, and scoped mutation.
//!
//! A file is *managed* when its content contains the [`Sentinel`] line.
//! Managed-ness is never stored: every operation re-reads the file.
//!
//! - [`header`] — classifier predicates, header insertion and removal
//! - [`scan`] — lazy directory walks, optionally filtered to managed files
//! - [`content`] — find/replace gated by the classifier
//! - [`batch`] — per-file results for continue-on-error operations
//! - [`error`] — [`KerbError`]

pub mod batch;
pub mod content;
pub mod error;
pub mod header;
pub mod scan;
pub mod types;

pub use batch::{BatchReport, FileOutcome};
pub use content::{replace_all_managed, replace_bytes, replace_in_file};
pub use error::KerbError;
pub use header::{
    add_header_to_one, add_header_to_tree, has_header, has_header_anywhere, has_header_as_prefix,
    insert_header, remove_header,
};
pub use scan::{find_managed, list_managed, walk, ManagedFiles, Walk};
pub use types::{HeaderOutcome, ReplaceOutcome, Sentinel, DEFAULT_SENTINEL};
