//! Error types for launcher operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The located executable does not exist at spawn time
    ///
    /// Raised when neither a build artifact nor a PATH lookup produced a
    /// runnable `boa`. Terminal for the session-start attempt; the message
    /// is user-facing.
    #[error(
        "Boa executable not found: {0}. Build the boa CLI (`cargo build`) \
         in your boa checkout, or install `boa` on your PATH."
    )]
    ExecutableNotFound(String),

    /// Resolution produced a configuration without a target program
    ///
    /// Terminal for the session-start attempt; the message is user-facing.
    #[error(
        "Cannot start a debug session: no program specified. Open a \
         JavaScript file or set \"program\" in your launch configuration."
    )]
    ProgramNotSpecified,

    /// Spawn failures other than a missing executable (permissions, limits)
    #[error("Failed to start the boa debug adapter: {0}")]
    Spawn(String),
}
