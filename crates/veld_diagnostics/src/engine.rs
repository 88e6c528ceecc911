//! The diagnostic engine: the reporting entry point for every compiler phase.

use crate::config::RunConfig;
use crate::diagnostic::Diagnostic;
use crate::recovery::{RecoveryContext, RecoveryMode};
use crate::renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
use std::io::Write;
use std::process;
use veld_source::{SourceBuffer, SourceLocation};

/// The diagnostic dispatcher for one compilation run.
///
/// Owns the run configuration, the recovery context, the currently active
/// source buffer, and the output sink. Every compiler phase reports through
/// the `panic*` / `error*` / `warn*` families:
///
/// - `panic*` (fatal): renders, then either terminates the process with a
///   non-zero status or, in fault-tolerant mode with a registered sink,
///   routes the message and returns to the caller.
/// - `error*` (recoverable): renders and routes to the sink when one is
///   registered, independent of the fault-tolerance flag. Never terminates.
/// - `warn*`: suppressed entirely (no output, no counting) in quiet mode;
///   otherwise renders and increments the warning counter. Never routed.
///
/// The engine is a plain value with no hidden global state; multi-file or
/// multi-threaded drivers construct one engine per translation unit and merge
/// the counters afterward.
pub struct DiagnosticEngine {
    config: RunConfig,
    recovery: RecoveryContext,
    source: Option<SourceBuffer>,
    renderer: Box<dyn DiagnosticRenderer>,
    out: Box<dyn Write>,
}

impl DiagnosticEngine {
    /// Creates an engine writing to stderr, with the renderer selected by
    /// `config.json_output`.
    pub fn new(config: RunConfig) -> Self {
        Self::with_writer(config, Box::new(std::io::stderr()))
    }

    /// Creates an engine writing to the given sink (used by tests and by
    /// drivers that redirect diagnostics).
    pub fn with_writer(config: RunConfig, out: Box<dyn Write>) -> Self {
        let renderer: Box<dyn DiagnosticRenderer> = if config.json_output {
            Box::new(JsonRenderer)
        } else {
            Box::new(TerminalRenderer::new(config.color))
        };
        Self {
            config,
            recovery: RecoveryContext::new(),
            source: None,
            renderer,
            out,
        }
    }

    /// Installs the source buffer diagnostics resolve context against.
    ///
    /// Called whenever the active file changes (e.g., across translation
    /// units); the buffer's name becomes the reported file name.
    pub fn set_source(&mut self, buffer: SourceBuffer) {
        self.source = Some(buffer);
    }

    /// The currently installed source buffer, if any.
    pub fn source(&self) -> Option<&SourceBuffer> {
        self.source.as_ref()
    }

    /// The recovery context, for pre-run configuration.
    pub fn recovery_mut(&mut self) -> &mut RecoveryContext {
        &mut self.recovery
    }

    /// The recovery context.
    pub fn recovery(&self) -> &RecoveryContext {
        &self.recovery
    }

    /// Warnings reported so far in this run.
    pub fn warning_count(&self) -> u32 {
        self.recovery.warning_count()
    }

    /// Recoverable errors reported so far in this run.
    pub fn error_count(&self) -> u32 {
        self.recovery.error_count()
    }

    // --- fatal ---

    /// Reports a fatal diagnostic with no source location.
    ///
    /// Terminates the process unless the recovery context downgrades fatals
    /// to routed events.
    pub fn panic(&mut self, message: impl Into<String>) {
        self.dispatch_fatal(Diagnostic::fatal(message));
    }

    /// Reports a fatal diagnostic at a source location.
    pub fn panic_at(&mut self, loc: SourceLocation, message: impl Into<String>) {
        self.dispatch_fatal(Diagnostic::fatal(message).with_location(loc));
    }

    /// Reports a fatal diagnostic with a suggestion.
    pub fn panic_with_hint(
        &mut self,
        loc: SourceLocation,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.dispatch_fatal(Diagnostic::fatal(message).with_location(loc).with_hint(hint));
    }

    /// Reports a fatal diagnostic with multiple suggestions.
    pub fn panic_with_hints(&mut self, loc: SourceLocation, message: impl Into<String>, hints: &[&str]) {
        let mut diag = Diagnostic::fatal(message).with_location(loc);
        for hint in hints {
            diag = diag.with_hint(*hint);
        }
        self.dispatch_fatal(diag);
    }

    // --- recoverable error ---

    /// Reports a recoverable error with no source location.
    ///
    /// Renders, then routes to the sink when one is registered. Always
    /// returns to the caller.
    pub fn error(&mut self, message: impl Into<String>) {
        self.dispatch_error(Diagnostic::error(message));
    }

    /// Reports a recoverable error at a source location.
    pub fn error_at(&mut self, loc: SourceLocation, message: impl Into<String>) {
        self.dispatch_error(Diagnostic::error(message).with_location(loc));
    }

    /// Reports a recoverable error with a suggestion.
    pub fn error_with_hint(
        &mut self,
        loc: SourceLocation,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.dispatch_error(Diagnostic::error(message).with_location(loc).with_hint(hint));
    }

    /// Reports a recoverable error with multiple suggestions.
    pub fn error_with_hints(&mut self, loc: SourceLocation, message: impl Into<String>, hints: &[&str]) {
        let mut diag = Diagnostic::error(message).with_location(loc);
        for hint in hints {
            diag = diag.with_hint(*hint);
        }
        self.dispatch_error(diag);
    }

    // --- warning ---

    /// Reports a warning with no source location.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.dispatch_warning(Diagnostic::warning(message));
    }

    /// Reports a warning at a source location.
    pub fn warn_at(&mut self, loc: SourceLocation, message: impl Into<String>) {
        self.dispatch_warning(Diagnostic::warning(message).with_location(loc));
    }

    /// Reports a warning with a note.
    pub fn warn_with_hint(
        &mut self,
        loc: SourceLocation,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.dispatch_warning(Diagnostic::warning(message).with_location(loc).with_hint(hint));
    }

    // --- dispatch ---

    fn dispatch_fatal(&mut self, diag: Diagnostic) {
        self.emit(&diag);
        match self.recovery.mode() {
            RecoveryMode::TolerantSunk => {
                let message = diag.callback_message();
                self.recovery.route(diag.location, &message);
            }
            RecoveryMode::Strict | RecoveryMode::TolerantNoSink => process::exit(1),
        }
    }

    fn dispatch_error(&mut self, diag: Diagnostic) {
        self.emit(&diag);
        self.recovery.note_error();
        let message = diag.callback_message();
        self.recovery.route(diag.location, &message);
    }

    fn dispatch_warning(&mut self, diag: Diagnostic) {
        if self.config.quiet {
            return;
        }
        self.emit(&diag);
        self.recovery.note_warning();
    }

    /// Writes one complete rendering to the sink. Write failures are
    /// swallowed: a diagnostic about a failed diagnostic has nowhere to go.
    fn emit(&mut self, diag: &Diagnostic) {
        let rendered = self.renderer.render(diag, self.source.as_ref());
        let _ = self.out.write_all(rendered.as_bytes());
        let _ = self.out.flush();
    }
}
