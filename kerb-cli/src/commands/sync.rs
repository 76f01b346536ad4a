//! `kerb sync` — mirror managed files from a source tree into the root.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use kerb_core::HeaderOutcome;
use kerb_sync::{strip_headers, sync, SyncReport};

use super::{report_failure, Workspace};

/// Arguments for `kerb sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Source directory whose managed files replace those under the root.
    pub source: PathBuf,

    /// Remove the kerb header from the synced files afterwards.
    #[arg(long)]
    pub remove_header: bool,
}

impl SyncArgs {
    pub fn run(self, ws: &Workspace) -> Result<ExitCode> {
        let report = sync(&self.source, &ws.root, &ws.sentinel)
            .with_context(|| format!("sync from '{}' failed", self.source.display()))?;
        tracing::debug!(
            removed = report.removed.len(),
            copied = report.copied.len(),
            root = %ws.root.display(),
            "sync finished"
        );
        print_summary(&report);

        if self.remove_header {
            let stripped = strip_headers(&ws.root, &ws.sentinel)
                .context("could not list synced files")?;
            for outcome in &stripped {
                match &outcome.result {
                    Ok(HeaderOutcome::Removed) => {
                        println!("Kerb header removed from: {}", outcome.path.display())
                    }
                    Ok(_) => println!("No leading Kerb header in: {}", outcome.path.display()),
                    Err(err) => report_failure("removing header from", &outcome.path, err),
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn print_summary(report: &SyncReport) {
    println!(
        "Synced {} file(s), cleaned {} managed file(s) first.",
        report.copied.len(),
        report.removed.len()
    );
}
