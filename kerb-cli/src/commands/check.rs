//! `kerb is-kerb-file <file>` — scriptable header check.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use kerb_core::has_header;

use super::{Workspace, EXIT_NOT_MANAGED};

/// Arguments for `kerb is-kerb-file`.
#[derive(Args, Debug)]
pub struct IsKerbFileArgs {
    /// File to check.
    pub file: PathBuf,
}

impl IsKerbFileArgs {
    pub fn run(self, ws: &Workspace) -> Result<ExitCode> {
        let managed = has_header(&self.file, &ws.sentinel)?;
        println!("{managed}");
        if managed {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::from(EXIT_NOT_MANAGED))
        }
    }
}
