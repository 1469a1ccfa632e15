//! User notification boundary
//!
//! The launcher never talks to an editor UI directly. Failures the user
//! must see are funneled through the [`Reporter`] trait so the embedding
//! host decides how to present them: a notification popup, a log pane, or
//! plain stderr.

use tracing::{info, warn};

/// Host capability for surfacing plain-text messages to the user.
pub trait Reporter {
    /// Informational message
    fn inform(&self, message: &str);

    /// Warning the user should see before a session fails to start
    fn warn(&self, message: &str);
}

/// Reporter that forwards messages to the tracing subscriber.
///
/// Used by the CLI front-end, where "user visible" means stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn inform(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Reporter that discards every message.
///
/// For embedders that surface failures from the returned [`crate::Error`]
/// themselves and want no duplicate notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn inform(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}
