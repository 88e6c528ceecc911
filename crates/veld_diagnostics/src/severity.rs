//! Diagnostic severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic message.
///
/// Ordered from least severe (`Warning`) to most severe (`Fatal`), matching
/// the derived `PartialOrd`/`Ord` implementation based on declaration order.
///
/// `Error` is recoverable: analysis continues after reporting, though its
/// result is unreliable. `Fatal` terminates the run unless the recovery
/// context downgrades it to a routed event.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// A potential issue; analysis continues and the result is usable.
    Warning,
    /// A recoverable error; analysis continues but the result is unreliable.
    Error,
    /// An error the run cannot continue past, unless explicitly downgraded
    /// by fault-tolerance configuration.
    Fatal,
}

impl Severity {
    /// Returns `true` if this severity is [`Fatal`](Severity::Fatal).
    pub fn is_fatal(self) -> bool {
        self == Severity::Fatal
    }

    /// The `level` value used in the machine-readable wire record.
    ///
    /// The wire format only distinguishes errors from warnings, so `Fatal`
    /// maps to `"error"`.
    pub fn wire_level(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error | Severity::Fatal => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn is_fatal() {
        assert!(Severity::Fatal.is_fatal());
        assert!(!Severity::Error.is_fatal());
        assert!(!Severity::Warning.is_fatal());
    }

    #[test]
    fn wire_level_collapses_fatal() {
        assert_eq!(Severity::Warning.wire_level(), "warning");
        assert_eq!(Severity::Error.wire_level(), "error");
        assert_eq!(Severity::Fatal.wire_level(), "error");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Fatal), "fatal");
    }
}
