//! # kerb-sync
//!
//! Mirror sync of managed files between two directory trees.
//!
//! Call [`sync`] to replace a destination's managed files with the source's,
//! then optionally [`strip_headers`] to drop the marker from the copies.

pub mod error;
pub mod mirror;

pub use error::SyncError;
pub use mirror::{strip_headers, sync, CopiedFile, SyncReport};
