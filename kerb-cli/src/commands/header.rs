//! `kerb insert-header` and `kerb add-header` — mark files as managed.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use kerb_core::{add_header_to_one, add_header_to_tree, has_header, insert_header, HeaderOutcome};

use super::{report_failure, Workspace};

/// Arguments for `kerb insert-header`.
#[derive(Args, Debug)]
pub struct InsertHeaderArgs {
    /// File to mark as managed.
    pub file: PathBuf,
}

impl InsertHeaderArgs {
    pub fn run(self, ws: &Workspace) -> Result<ExitCode> {
        // Any sentinel counts here, not just a leading one.
        if has_header(&self.file, &ws.sentinel)? {
            println!("Kerb header already present.");
            return Ok(ExitCode::SUCCESS);
        }
        insert_header(&self.file, &ws.sentinel)?;
        println!("Kerb header inserted.");
        Ok(ExitCode::SUCCESS)
    }
}

/// Arguments for `kerb add-header`.
#[derive(Args, Debug)]
pub struct AddHeaderArgs {
    /// Single file to mark; omit to mark every file under the root.
    pub file: Option<PathBuf>,
}

impl AddHeaderArgs {
    pub fn run(self, ws: &Workspace) -> Result<ExitCode> {
        if let Some(file) = self.file {
            let outcome = add_header_to_one(&file, &ws.sentinel)
                .with_context(|| format!("could not add header to {}", file.display()))?;
            print_outcome(&file, outcome);
            return Ok(ExitCode::SUCCESS);
        }

        let report = add_header_to_tree(&ws.root, &ws.sentinel);
        for outcome in &report {
            match &outcome.result {
                Ok(result) => print_outcome(&outcome.path, *result),
                Err(err) => report_failure("adding header to", &outcome.path, err),
            }
        }
        if let Some(err) = report.into_interruption() {
            return Err(err).with_context(|| format!("could not walk {}", ws.root.display()));
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn print_outcome(path: &std::path::Path, outcome: HeaderOutcome) {
    match outcome {
        HeaderOutcome::Unchanged => println!("Kerb header already leading: {}", path.display()),
        _ => println!("Kerb header added to: {}", path.display()),
    }
}
