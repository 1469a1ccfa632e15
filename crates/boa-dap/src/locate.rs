//! Boa executable discovery
//!
//! Walks up from the first workspace root looking for a boa checkout, then
//! probes its `target/` directory for a built `boa` binary. Every branch
//! produces a usable spawn target: when nothing is found on disk the lookup
//! is deferred to the PATH search at spawn time, and a truly missing
//! executable only surfaces there.

use crate::constants::{artifact, marker, FALLBACK_EXECUTABLE};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Platform the launcher is targeting; decides the artifact file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Platform of the current build.
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// File name of the boa binary inside a `target/<profile>/` directory.
    fn executable_name(self) -> &'static str {
        match self {
            Platform::Unix => FALLBACK_EXECUTABLE,
            Platform::Windows => "boa.exe",
        }
    }
}

/// Spawn target produced by [`locate`].
///
/// A found build artifact stays distinct from the bare executable name so
/// callers can tell "run this file" apart from "let the OS search PATH",
/// even if a file named `boa` happens to sit in the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoaExecutable {
    /// Concrete build artifact found under a repository `target/` directory
    Artifact(PathBuf),
    /// No artifact found; spawn by name and let PATH resolution decide
    PathLookup,
}

impl BoaExecutable {
    /// Program value to hand to the process spawner.
    pub fn program(&self) -> &Path {
        match self {
            BoaExecutable::Artifact(path) => path,
            BoaExecutable::PathLookup => Path::new(FALLBACK_EXECUTABLE),
        }
    }

    /// True when resolution was deferred to the ambient PATH search.
    pub fn is_path_lookup(&self) -> bool {
        matches!(self, BoaExecutable::PathLookup)
    }
}

impl fmt::Display for BoaExecutable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoaExecutable::Artifact(path) => path.display().fmt(f),
            BoaExecutable::PathLookup => f.write_str(FALLBACK_EXECUTABLE),
        }
    }
}

/// Locate the boa executable for a set of workspace roots.
///
/// Only the first root is searched. Candidates are probed debug build
/// first, then release, so the binary a developer just rebuilt wins.
/// This never fails: every branch falls back to
/// [`BoaExecutable::PathLookup`].
pub fn locate(workspace_roots: &[PathBuf], platform: Platform) -> BoaExecutable {
    let Some(first_root) = workspace_roots.first() else {
        debug!("no workspace root open, deferring to PATH lookup");
        return BoaExecutable::PathLookup;
    };

    let Some(repo_root) = find_repository_root(first_root) else {
        debug!(
            start = %first_root.display(),
            "no boa checkout found, deferring to PATH lookup"
        );
        return BoaExecutable::PathLookup;
    };

    for profile in artifact::PROFILES {
        let candidate = repo_root
            .join(artifact::TARGET_DIR)
            .join(profile)
            .join(platform.executable_name());
        if candidate.exists() {
            debug!(profile, path = %candidate.display(), "found boa build artifact");
            return BoaExecutable::Artifact(candidate);
        }
    }

    debug!(
        root = %repo_root.display(),
        "boa checkout has no built artifact, deferring to PATH lookup"
    );
    BoaExecutable::PathLookup
}

/// Find the closest enclosing boa repository root.
///
/// Checks the starting directory, then ascends at most
/// [`marker::MAX_ASCENTS`] parent levels, so pathological layouts cannot
/// loop forever. The first satisfying directory wins.
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    for _ in 0..=marker::MAX_ASCENTS {
        if is_repository_root(dir) {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
    None
}

/// Marker predicate: manifest + `cli/` sibling + boa token in the manifest.
///
/// An unreadable manifest counts as "marker not satisfied" and the ascent
/// continues; permissions and transient I/O must not abort discovery.
fn is_repository_root(dir: &Path) -> bool {
    let manifest = dir.join(marker::MANIFEST_FILE);
    if !manifest.is_file() || !dir.join(marker::CLI_DIR).is_dir() {
        return false;
    }

    match fs::read_to_string(&manifest) {
        Ok(contents) => marker::MANIFEST_TOKENS
            .iter()
            .any(|token| contents.contains(token)),
        Err(err) => {
            debug!(
                manifest = %manifest.display(),
                %err,
                "manifest unreadable, continuing ascent"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_of_path_lookup_is_bare_name() {
        assert_eq!(BoaExecutable::PathLookup.program(), Path::new("boa"));
    }

    #[test]
    fn test_display_distinguishes_artifact_from_lookup() {
        let artifact = BoaExecutable::Artifact(PathBuf::from("/repo/target/debug/boa"));
        assert_eq!(artifact.to_string(), "/repo/target/debug/boa");
        assert_eq!(BoaExecutable::PathLookup.to_string(), "boa");
        assert!(BoaExecutable::PathLookup.is_path_lookup());
        assert!(!artifact.is_path_lookup());
    }

    #[test]
    fn test_executable_name_per_platform() {
        assert_eq!(Platform::Unix.executable_name(), "boa");
        assert_eq!(Platform::Windows.executable_name(), "boa.exe");
    }

    #[test]
    fn test_locate_without_workspace_roots_defers() {
        assert_eq!(locate(&[], Platform::Unix), BoaExecutable::PathLookup);
    }
}
