//! `locate` command: show which executable `serve` would run

use anyhow::Result;
use boa_dap::{locate, BoaExecutable, Platform};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Workspace root to search for a boa checkout (repeatable; defaults
    /// to the current directory)
    #[arg(long = "workspace", value_name = "DIR")]
    pub workspaces: Vec<PathBuf>,

    /// Exit with an error instead of falling back to PATH lookup
    #[arg(long)]
    pub require_artifact: bool,
}

pub fn run(args: LocateArgs) -> Result<()> {
    let roots = super::workspace_roots(args.workspaces);

    match locate(&roots, Platform::host()) {
        BoaExecutable::Artifact(path) => {
            println!("{}", path.display());
            Ok(())
        }
        BoaExecutable::PathLookup if args.require_artifact => {
            anyhow::bail!("no boa build artifact found near the workspace")
        }
        BoaExecutable::PathLookup => {
            println!("boa (resolved from PATH at spawn time)");
            Ok(())
        }
    }
}
