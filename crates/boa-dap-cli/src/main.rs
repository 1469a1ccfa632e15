//! boa-dap - run the boa debug adapter from any editor
//!
//! Editors that start a debug adapter as a plain command point at this
//! binary. `serve` finds a built `boa` executable near the workspace and
//! runs it in DAP server mode with the protocol on this process's stdio;
//! `locate` and `resolve` expose the two decision steps individually for
//! editor plugins and troubleshooting.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "boa-dap", version, about = "Launcher for the boa debug adapter")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Locate the boa executable and run it as a DAP server on stdio
    Serve(commands::serve::ServeArgs),
    /// Print the executable `serve` would run, without starting it
    Locate(commands::locate::LocateArgs),
    /// Normalize a launch configuration and print the result
    Resolve(commands::resolve::ResolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Command::Serve(args) => commands::serve::run(args),
        Command::Locate(args) => commands::locate::run(args),
        Command::Resolve(args) => commands::resolve::run(args),
    }
}

/// Logs always go to stderr: in `serve` mode stdout carries the DAP stream
/// and a single stray line would corrupt the protocol framing.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
