//! `kerb replace` and `kerb replace-all` — text replacement in managed files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use kerb_core::{has_header, replace_all_managed, replace_in_file};

use super::{report_failure, Workspace};

/// Arguments for `kerb replace`.
#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Managed file to edit.
    pub file: PathBuf,

    /// Text to replace.
    #[arg(allow_hyphen_values = true)]
    pub old: String,

    /// Replacement text.
    #[arg(allow_hyphen_values = true)]
    pub new: String,
}

impl ReplaceArgs {
    pub fn run(self, ws: &Workspace) -> Result<ExitCode> {
        if !has_header(&self.file, &ws.sentinel)? {
            println!("Kerb header not present. No replacement performed.");
            return Ok(ExitCode::SUCCESS);
        }
        replace_in_file(&self.file, &self.old, &self.new, &ws.sentinel)?;
        println!("Replacement performed.");
        Ok(ExitCode::SUCCESS)
    }
}

/// Arguments for `kerb replace-all`.
#[derive(Args, Debug)]
pub struct ReplaceAllArgs {
    /// Text to replace.
    #[arg(allow_hyphen_values = true)]
    pub old: String,

    /// Replacement text.
    #[arg(allow_hyphen_values = true)]
    pub new: String,
}

impl ReplaceAllArgs {
    pub fn run(self, ws: &Workspace) -> Result<ExitCode> {
        let report = replace_all_managed(&ws.root, &self.old, &self.new, &ws.sentinel)
            .with_context(|| format!("could not list managed files under {}", ws.root.display()))?;
        for outcome in &report {
            match &outcome.result {
                Ok(_) => println!("Replaced in: {}", outcome.path.display()),
                Err(err) => report_failure("replacing in", &outcome.path, err),
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}
