//! Launcher constants
//!
//! Centralizes the magic strings shared by the locator, the resolver,
//! and the CLI front-end. This prevents typos and keeps the editor-facing
//! identifiers in one place.

/// Debug type registered with the editor host.
///
/// Sessions of this type are routed to this launcher; synthesized default
/// configurations carry it in their `type` field.
pub const DEBUG_TYPE: &str = "boa-debugger";

/// Adapter id DAP clients send in their `initialize` request.
pub const ADAPTER_ID: &str = "boa";

/// Executable name used when no build artifact is found.
///
/// Spawning this bare name defers resolution to the PATH search performed
/// by the operating system at spawn time.
pub const FALLBACK_EXECUTABLE: &str = "boa";

/// Flag that switches the boa CLI into DAP server mode over stdio.
pub const DAP_FLAG: &str = "--dap";

/// Language id of documents eligible for a default launch configuration.
pub const JAVASCRIPT_LANGUAGE_ID: &str = "javascript";

/// Name given to synthesized default configurations.
pub const DEFAULT_CONFIG_NAME: &str = "Debug Current File";

/// DAP request command names this launcher writes into configurations
pub mod requests {
    /// Launch a program for debugging
    pub const LAUNCH: &str = "launch";
}

/// Pieces of the repository-root marker predicate
pub mod marker {
    /// Manifest file probed at each ascended directory
    pub const MANIFEST_FILE: &str = "Cargo.toml";

    /// Directory that must sit next to the manifest
    pub const CLI_DIR: &str = "cli";

    /// Manifest content tokens identifying a boa checkout.
    ///
    /// An unrelated project with a `Cargo.toml` and a `cli/` directory must
    /// not be mistaken for one, so the manifest text has to name boa itself.
    pub const MANIFEST_TOKENS: [&str; 2] = ["boa_engine", "boa_cli"];

    /// Upper bound on parent-directory ascents.
    ///
    /// Keeps the walk finite on pathological layouts (symlink cycles,
    /// permission walls).
    pub const MAX_ASCENTS: usize = 10;
}

/// Build artifact layout of the boa repository
pub mod artifact {
    /// Cargo build output directory under the repository root
    pub const TARGET_DIR: &str = "target";

    /// Build profiles probed in order; debug first, matching the build a
    /// developer most recently produced during iterative work.
    pub const PROFILES: [&str; 2] = ["debug", "release"];
}
