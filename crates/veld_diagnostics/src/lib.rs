//! Diagnostic dispatch, recovery, and dual-mode rendering for the Veld front-end.
//!
//! Every compiler phase reports through a [`DiagnosticEngine`]: fatal errors
//! (`panic*`), recoverable errors (`error*`), and warnings (`warn*`), with
//! source-context rendering and suggestion attachment. The engine renders to
//! either a human-readable terminal block or one machine-readable JSON record
//! per diagnostic, and consults its [`RecoveryContext`] to decide whether a
//! fatal diagnostic terminates the process or is routed to a caller-supplied
//! [`RecoverySink`] so analysis can continue.

#![warn(missing_docs)]

pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod messages;
pub mod recovery;
pub mod renderer;
pub mod severity;

pub use config::RunConfig;
pub use diagnostic::Diagnostic;
pub use engine::DiagnosticEngine;
pub use recovery::{RecoveryContext, RecoveryMode, RecoverySink};
pub use renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
pub use severity::Severity;
