//! CLI command implementations

pub mod locate;
pub mod resolve;
pub mod serve;

use std::env;
use std::path::PathBuf;

/// Workspace roots for the locator: the `--workspace` flags in order, or
/// the current directory when none were given.
pub fn workspace_roots(flags: Vec<PathBuf>) -> Vec<PathBuf> {
    if !flags.is_empty() {
        return flags;
    }
    env::current_dir().map(|dir| vec![dir]).unwrap_or_default()
}
