//! Subcommand implementations.

pub mod check;
pub mod header;
pub mod list;
pub mod replace;
pub mod sync;

use std::fmt::Display;
use std::path::PathBuf;

use colored::Colorize;
use kerb_core::Sentinel;

/// Usage or argument error.
pub const EXIT_USAGE: u8 = 1;
/// `is-kerb-file` on a file without the header.
pub const EXIT_NOT_MANAGED: u8 = 1;
/// Fatal I/O failure.
pub const EXIT_FATAL: u8 = 2;

/// Resolved inputs shared by every subcommand.
#[derive(Debug)]
pub struct Workspace {
    /// Root for tree-scoped commands and the sync destination.
    pub root: PathBuf,
    pub sentinel: Sentinel,
}

/// Report one failed file of a continue-on-error batch on stderr.
pub(crate) fn report_failure(action: &str, path: &std::path::Path, err: &impl Display) {
    eprintln!("{} {action} {}: {err}", "Error".red(), path.display());
}
