//! Launch configuration resolution
//!
//! Normalizes the configuration the editor hands over before a debug
//! session starts. An empty configuration (the user pressed debug with no
//! launch.json entry) becomes a default for the focused JavaScript file;
//! anything still missing a program afterwards is rejected with a
//! user-facing message.

use crate::constants::{requests, DEBUG_TYPE, DEFAULT_CONFIG_NAME, JAVASCRIPT_LANGUAGE_ID};
use crate::error::{Error, Result};
use crate::reporter::Reporter;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Document the editor currently has focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    /// Path of the document on disk
    pub path: PathBuf,
    /// Host language id, e.g. `"javascript"`
    pub language_id: String,
}

impl ActiveDocument {
    pub fn new(path: impl Into<PathBuf>, language_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language_id: language_id.into(),
        }
    }

    fn is_javascript(&self) -> bool {
        self.language_id == JAVASCRIPT_LANGUAGE_ID
    }
}

/// A launch configuration as the editor stores it.
///
/// Only the fields this launcher inspects are typed; everything else the
/// user wrote is carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfiguration {
    /// Debug type, `"boa-debugger"` for sessions routed here
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Display name of the configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// DAP request, `"launch"` or `"attach"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,

    /// Script to debug; required after resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Pause at the first statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_on_entry: Option<bool>,

    /// Working directory for the debuggee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,

    /// Any further user-supplied keys, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LaunchConfiguration {
    /// True when the user started debugging without any launch.json entry.
    fn is_unconfigured(&self) -> bool {
        self.kind.is_none() && self.request.is_none() && self.name.is_none()
    }

    /// Fill in the default configuration for the given document, in place.
    ///
    /// Keys outside the five defaults (`cwd`, free-form extras) are kept.
    fn apply_default(&mut self, document: &ActiveDocument) {
        self.kind = Some(DEBUG_TYPE.to_string());
        self.name = Some(DEFAULT_CONFIG_NAME.to_string());
        self.request = Some(requests::LAUNCH.to_string());
        self.program = Some(document.path.to_string_lossy().into_owned());
        self.stop_on_entry = Some(false);
    }
}

/// Resolve a candidate launch configuration.
///
/// Single pass, no retry: the configuration either comes back with a
/// non-empty `program` (and `cwd` inherited from the workspace folder when
/// it had none), or resolution fails with [`Error::ProgramNotSpecified`]
/// after reporting the message through `reporter`.
pub fn resolve(
    mut config: LaunchConfiguration,
    active_document: Option<&ActiveDocument>,
    workspace_folder: Option<&Path>,
    reporter: &dyn Reporter,
) -> Result<LaunchConfiguration> {
    if config.is_unconfigured() {
        match active_document {
            Some(document) if document.is_javascript() => {
                debug!(
                    program = %document.path.display(),
                    "no launch configuration given, defaulting to the focused file"
                );
                config.apply_default(document);
            }
            _ => {}
        }
    }

    match config.program.as_deref() {
        Some(program) if !program.is_empty() => {}
        _ => {
            let err = Error::ProgramNotSpecified;
            reporter.warn(&err.to_string());
            return Err(err);
        }
    }

    if config.cwd.is_none() {
        if let Some(folder) = workspace_folder {
            config.cwd = Some(folder.to_string_lossy().into_owned());
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Reporter that records every message for assertions.
    #[derive(Default)]
    struct RecordingReporter {
        warnings: Mutex<Vec<String>>,
    }

    impl Reporter for RecordingReporter {
        fn inform(&self, _message: &str) {}

        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }

    fn js_document() -> ActiveDocument {
        ActiveDocument::new("/p/a.js", "javascript")
    }

    #[test]
    fn test_empty_config_with_js_document_gets_default() {
        let reporter = RecordingReporter::default();
        let resolved = resolve(
            LaunchConfiguration::default(),
            Some(&js_document()),
            Some(Path::new("/p")),
            &reporter,
        )
        .unwrap();

        assert_eq!(resolved.kind.as_deref(), Some("boa-debugger"));
        assert_eq!(resolved.name.as_deref(), Some("Debug Current File"));
        assert_eq!(resolved.request.as_deref(), Some("launch"));
        assert_eq!(resolved.program.as_deref(), Some("/p/a.js"));
        assert_eq!(resolved.stop_on_entry, Some(false));
        assert_eq!(resolved.cwd.as_deref(), Some("/p"));
        assert!(reporter.warnings.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_config_without_document_is_rejected() {
        let reporter = RecordingReporter::default();
        let err = resolve(
            LaunchConfiguration::default(),
            None,
            Some(Path::new("/p")),
            &reporter,
        )
        .unwrap_err();

        assert_eq!(err, Error::ProgramNotSpecified);
        let warnings = reporter.warnings.lock().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("no program specified"));
    }

    #[test]
    fn test_non_javascript_document_gets_no_default() {
        let reporter = RecordingReporter::default();
        let document = ActiveDocument::new("/p/a.py", "python");
        let err = resolve(
            LaunchConfiguration::default(),
            Some(&document),
            None,
            &reporter,
        )
        .unwrap_err();

        assert_eq!(err, Error::ProgramNotSpecified);
    }

    #[test]
    fn test_empty_program_string_is_rejected() {
        let reporter = RecordingReporter::default();
        let config = LaunchConfiguration {
            kind: Some("boa-debugger".to_string()),
            request: Some("launch".to_string()),
            name: Some("broken".to_string()),
            program: Some(String::new()),
            ..Default::default()
        };

        let err = resolve(config, Some(&js_document()), None, &reporter).unwrap_err();
        assert_eq!(err, Error::ProgramNotSpecified);
    }

    #[test]
    fn test_partial_config_is_not_defaulted() {
        // A named entry missing its program is a user mistake, not a
        // request for the default configuration.
        let reporter = RecordingReporter::default();
        let config = LaunchConfiguration {
            name: Some("My session".to_string()),
            ..Default::default()
        };

        let err = resolve(config, Some(&js_document()), None, &reporter).unwrap_err();
        assert_eq!(err, Error::ProgramNotSpecified);
    }

    #[test]
    fn test_caller_cwd_is_kept() {
        let reporter = RecordingReporter::default();
        let config = LaunchConfiguration {
            kind: Some("boa-debugger".to_string()),
            name: Some("run".to_string()),
            request: Some("launch".to_string()),
            program: Some("/p/a.js".to_string()),
            cwd: Some("/elsewhere".to_string()),
            ..Default::default()
        };

        let resolved = resolve(config, None, Some(Path::new("/p")), &reporter).unwrap();
        assert_eq!(resolved.cwd.as_deref(), Some("/elsewhere"));
    }

    #[test]
    fn test_cwd_stays_unset_without_workspace_folder() {
        let reporter = RecordingReporter::default();
        let resolved = resolve(
            LaunchConfiguration::default(),
            Some(&js_document()),
            None,
            &reporter,
        )
        .unwrap();
        assert_eq!(resolved.cwd, None);
    }

    #[test]
    fn test_free_form_keys_pass_through() {
        let reporter = RecordingReporter::default();
        let mut config: LaunchConfiguration = serde_json::from_value(serde_json::json!({
            "type": "boa-debugger",
            "name": "with args",
            "request": "launch",
            "program": "/p/a.js",
            "args": ["--trace"],
            "env": {"RUST_LOG": "debug"}
        }))
        .unwrap();
        config.stop_on_entry = Some(true);

        let resolved = resolve(config, None, Some(Path::new("/p")), &reporter).unwrap();
        assert_eq!(resolved.extra["args"], serde_json::json!(["--trace"]));
        assert_eq!(resolved.extra["env"]["RUST_LOG"], "debug");
        assert_eq!(resolved.stop_on_entry, Some(true));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let config = LaunchConfiguration {
            kind: Some("boa-debugger".to_string()),
            stop_on_entry: Some(true),
            ..Default::default()
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "boa-debugger");
        assert_eq!(value["stopOnEntry"], true);
        assert!(value.get("stop_on_entry").is_none());

        let back: LaunchConfiguration = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }
}
