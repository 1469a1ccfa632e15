//! Adapter process boundary
//!
//! Builds the command line that turns a located boa executable into a DAP
//! server speaking over stdio. The spawned child belongs to the caller;
//! this module only decides what to run, where, and how a missing
//! executable is reported.

use crate::constants::DAP_FLAG;
use crate::error::{Error, Result};
use crate::locate::BoaExecutable;
use crate::reporter::Reporter;
use std::io;
use std::path::Path;
use std::process::{Child, Command};
use tracing::info;

/// Command that starts the boa CLI in DAP server mode.
///
/// The protocol runs over the child's stdin/stdout; stdio wiring is left to
/// the caller (an editor host pipes it, the CLI front-end inherits it).
pub fn adapter_command(executable: &BoaExecutable, cwd: Option<&Path>) -> Command {
    let mut cmd = Command::new(executable.program());
    cmd.arg(DAP_FLAG);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    cmd
}

/// Spawn the adapter process.
///
/// A `NotFound` spawn failure is the deferred outcome of locator fallback:
/// no build artifact existed and the PATH search came up empty too. It is
/// reported through `reporter` as the user-facing executable-not-found
/// message; any other failure maps to [`Error::Spawn`].
pub fn spawn_adapter(
    executable: &BoaExecutable,
    cwd: Option<&Path>,
    reporter: &dyn Reporter,
) -> Result<Child> {
    info!(program = %executable, "starting boa debug adapter");

    match adapter_command(executable, cwd).spawn() {
        Ok(child) => Ok(child),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let err = Error::ExecutableNotFound(executable.to_string());
            reporter.warn(&err.to_string());
            Err(err)
        }
        Err(err) => Err(Error::Spawn(err.to_string())),
    }
}
