//! kerb — manage files marked with the kerb header.
//!
//! # Usage
//!
//! ```text
//! kerb is-kerb-file <file>
//! kerb sync [--remove-header] <srcDir>
//! kerb insert-header <file>
//! kerb add-header [<file>]
//! kerb replace <file> <old> <new>
//! kerb replace-all <old> <new>
//! kerb list [--json]
//! ```
//!
//! Tree-scoped commands work on `--root` (env `KERB_ROOT`), defaulting to the
//! current directory. Exit status: 0 success, 1 usage error or a file that is
//! not managed, 2 I/O failure.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use commands::{
    check::IsKerbFileArgs,
    header::{AddHeaderArgs, InsertHeaderArgs},
    list::ListArgs,
    replace::{ReplaceAllArgs, ReplaceArgs},
    sync::SyncArgs,
    Workspace, EXIT_FATAL, EXIT_USAGE,
};
use kerb_core::Sentinel;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "kerb",
    version,
    about = "Find, mirror, and edit files marked as managed by kerb",
    long_about = None,
)]
struct Cli {
    /// Directory tree-scoped commands operate on (default: current directory).
    #[arg(long, global = true, env = "KERB_ROOT", value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print whether a file contains the kerb header (exit 1 when it does not).
    IsKerbFile(IsKerbFileArgs),

    /// Replace managed files under the root with the managed files of <srcDir>.
    Sync(SyncArgs),

    /// Insert the kerb header at the top of a file unless it is already managed.
    InsertHeader(InsertHeaderArgs),

    /// Add the kerb header to one file, or to every file under the root.
    AddHeader(AddHeaderArgs),

    /// Replace text in a single managed file.
    Replace(ReplaceArgs),

    /// Replace text in every managed file under the root.
    ReplaceAll(ReplaceAllArgs),

    /// List managed files under the root.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("could not determine current directory")?,
    };
    let ws = Workspace {
        root,
        sentinel: Sentinel::default(),
    };

    match cli.command {
        Commands::IsKerbFile(args) => args.run(&ws),
        Commands::Sync(args) => args.run(&ws),
        Commands::InsertHeader(args) => args.run(&ws),
        Commands::AddHeader(args) => args.run(&ws),
        Commands::Replace(args) => args.run(&ws),
        Commands::ReplaceAll(args) => args.run(&ws),
        Commands::List(args) => args.run(&ws),
    }
}

/// Diagnostics go to stderr; `KERB_LOG` wins over `RUST_LOG`.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env("KERB_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
