//! boa-dap - editor-side launcher for the boa debug adapter
//!
//! The boa CLI implements the Debug Adapter Protocol behind its `--dap`
//! flag; nothing in this crate speaks the protocol itself. This is the glue
//! an editor needs before that process exists:
//!
//! - [`locate`]: find a built `boa` binary near the workspace by walking up
//!   to the enclosing boa checkout and probing its `target/` directory,
//!   falling back to PATH lookup when nothing is found
//! - [`resolve`]: normalize a launch configuration, synthesizing a default
//!   for the focused JavaScript file when the user has none
//! - [`adapter_command`] / [`spawn_adapter`]: the process boundary that
//!   turns the located executable into a running DAP server on stdio
//!
//! All of it is stateless and synchronous; concurrent debug sessions can
//! call these functions independently. User-visible failures go through the
//! injected [`Reporter`] capability so hosts decide how to present them.

pub mod constants;
pub mod error;
pub mod launch;
pub mod locate;
pub mod reporter;
pub mod spawn;

pub use error::{Error, Result};
pub use launch::{resolve, ActiveDocument, LaunchConfiguration};
pub use locate::{find_repository_root, locate, BoaExecutable, Platform};
pub use reporter::{LogReporter, NullReporter, Reporter};
pub use spawn::{adapter_command, spawn_adapter};
