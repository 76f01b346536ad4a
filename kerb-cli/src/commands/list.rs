//! `kerb list` — print every managed file under the root.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use kerb_core::list_managed;

use super::Workspace;

/// Arguments for `kerb list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListJson<'a> {
    root: &'a PathBuf,
    files: &'a [PathBuf],
}

impl ListArgs {
    pub fn run(self, ws: &Workspace) -> Result<ExitCode> {
        let files = list_managed(&ws.root, &ws.sentinel)?;

        if self.json {
            let doc = ListJson {
                root: &ws.root,
                files: &files,
            };
            let out = serde_json::to_string_pretty(&doc).context("failed to serialize list")?;
            println!("{out}");
            return Ok(ExitCode::SUCCESS);
        }

        for file in &files {
            println!("{}", file.display());
        }
        Ok(ExitCode::SUCCESS)
    }
}
