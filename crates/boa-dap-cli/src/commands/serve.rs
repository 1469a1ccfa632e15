//! `serve` command: run `boa --dap` wired to this process's stdio
//!
//! The editor's pipe to this process IS the DAP stream, so the child
//! inherits stdio untouched and this process only waits and passes the
//! exit status back.

use anyhow::{Context, Result};
use boa_dap::{locate, spawn_adapter, LogReporter, Platform};
use clap::Args;
use std::path::PathBuf;
use std::process::exit;
use tracing::{debug, info};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Workspace root to search for a boa checkout (repeatable; defaults
    /// to the current directory)
    #[arg(long = "workspace", value_name = "DIR")]
    pub workspaces: Vec<PathBuf>,

    /// Working directory for the adapter process
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

pub fn run(args: ServeArgs) -> Result<()> {
    let roots = super::workspace_roots(args.workspaces);
    debug!(roots = ?roots, "searching workspace roots");

    let executable = locate(&roots, Platform::host());
    info!(program = %executable, "serving DAP over stdio");

    let mut child = spawn_adapter(&executable, args.cwd.as_deref(), &LogReporter)
        .context("Could not start the boa debug adapter")?;

    let status = child
        .wait()
        .context("Failed waiting for the boa debug adapter")?;

    debug!(%status, "adapter exited");
    exit(status.code().unwrap_or(1));
}
