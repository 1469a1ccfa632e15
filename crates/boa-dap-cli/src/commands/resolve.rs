//! `resolve` command: normalize a launch configuration
//!
//! Editor plugins outside VSCode can shell out to this instead of
//! reimplementing the default-configuration rules: feed the candidate
//! configuration as an argument or on stdin, get the normalized JSON back,
//! or a nonzero exit with the user-facing message.

use anyhow::{Context, Result};
use boa_dap::{resolve, ActiveDocument, LaunchConfiguration, NullReporter};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Candidate configuration as JSON; `-` or omitted reads stdin
    #[arg(value_name = "CONFIG")]
    pub config: Option<String>,

    /// Path of the document the editor has focused
    #[arg(long, value_name = "PATH")]
    pub active_document: Option<PathBuf>,

    /// Language id of the focused document
    #[arg(long, value_name = "ID", default_value = "javascript")]
    pub language_id: String,

    /// Workspace folder the session was started from
    #[arg(long, value_name = "DIR")]
    pub workspace_folder: Option<PathBuf>,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let raw = match args.config.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read configuration from stdin")?;
            buffer
        }
        Some(json) => json.to_string(),
    };

    let raw = raw.trim();
    let config: LaunchConfiguration = if raw.is_empty() {
        LaunchConfiguration::default()
    } else {
        serde_json::from_str(raw).context("Invalid launch configuration JSON")?
    };

    let document = args
        .active_document
        .map(|path| ActiveDocument::new(path, args.language_id));

    // Rejections reach the user through this command's exit message, so the
    // reporter has nothing extra to say.
    let resolved = resolve(
        config,
        document.as_ref(),
        args.workspace_folder.as_deref(),
        &NullReporter,
    )?;

    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
