//! Transient diagnostic values: one reportable event each.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use veld_source::SourceLocation;

/// One reportable compiler event.
///
/// Diagnostics are transient: constructed at the report site, handed to the
/// engine for rendering and dispatch, then discarded. Nothing is retained
/// beyond the engine's running counters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The primary message.
    pub message: String,
    /// Where in the current source buffer the event occurred, if known.
    pub location: Option<SourceLocation>,
    /// Suggestion/hint strings, rendered in order after the source context.
    pub hints: Vec<String>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            location: None,
            hints: Vec::new(),
        }
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates a recoverable-error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a fatal diagnostic.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, message)
    }

    /// Attaches a source location.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Appends a suggestion/hint line.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// The single-string form handed to a recovery callback.
    ///
    /// The callback contract accepts one message, not a list, so hints are
    /// folded into the message text.
    pub fn callback_message(&self) -> String {
        if self.hints.is_empty() {
            self.message.clone()
        } else {
            format!("{} (help: {})", self.message, self.hints.join("; "))
        }
    }
}
