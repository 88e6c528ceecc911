//! Diagnostic rendering backends for human-readable and machine-readable output.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use serde::Serialize;
use veld_source::SourceBuffer;

/// File name reported when no source buffer is installed in the engine.
pub const UNKNOWN_FILE: &str = "unknown";

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Trait for rendering diagnostics into formatted output strings.
///
/// A renderer produces exactly one complete rendering per call; the engine
/// writes it to the output sink in a single operation.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic, resolving source context against the
    /// currently installed buffer (if any).
    fn render(&self, diag: &Diagnostic, source: Option<&SourceBuffer>) -> String;
}

/// Renders diagnostics as a caret-annotated terminal block.
///
/// Produces output like:
/// ```text
/// error: expected ';'
///   --> src/main.veld:12:5
///    |
/// 12 | let x = 5
///    |     ^ here
///    |
///    = help: add a semicolon
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source: Option<&SourceBuffer>) -> String {
        let mut out = String::new();

        let (head_color, head_label) = match diag.severity {
            Severity::Warning => (YELLOW, "warning"),
            Severity::Error => (RED, "error"),
            Severity::Fatal => (RED, "Fatal"),
        };

        // Header: 'error: message'.
        out.push_str(&format!(
            "{}{}: {}{}{}{}\n",
            self.paint(head_color),
            head_label,
            self.paint(RESET),
            self.paint(BOLD),
            diag.message,
            self.paint(RESET),
        ));

        // Location: '--> file:line:col'.
        if let Some(loc) = diag.location {
            let file = source.map_or(UNKNOWN_FILE, |b| b.name());
            out.push_str(&format!(
                "{}  --> {}{}:{}:{}\n",
                self.paint(BLUE),
                self.paint(RESET),
                file,
                loc.line,
                loc.col,
            ));

            // Context, only if the anchor resolves inside the buffer.
            if let Some(ctx) = source.and_then(|b| b.context_line(loc)) {
                let bar = format!("{}   |{}\n", self.paint(BLUE), self.paint(RESET));
                out.push_str(&bar);
                out.push_str(&format!(
                    "{}{:<3}| {}{}\n",
                    self.paint(BLUE),
                    loc.line,
                    self.paint(RESET),
                    ctx.text,
                ));
                out.push_str(&format!("{}   | {}", self.paint(BLUE), self.paint(RESET)));
                out.push_str(&" ".repeat(ctx.caret_pad));
                out.push_str(&format!(
                    "{}^ here{}\n",
                    self.paint(head_color),
                    self.paint(RESET),
                ));
                out.push_str(&bar);
            }
        }

        // Hints: '= help:' for errors, '= note:' for warnings.
        let hint_label = if diag.severity == Severity::Warning {
            "note"
        } else {
            "help"
        };
        for hint in &diag.hints {
            out.push_str(&format!(
                "{}   = {}: {}{}\n",
                self.paint(CYAN),
                hint_label,
                self.paint(RESET),
                hint,
            ));
        }

        out
    }
}

/// One machine-readable record per diagnostic, consumed by editor tooling.
///
/// Each record is emitted on its own line; consumers treat every line as an
/// independent JSON object.
#[derive(Serialize)]
struct WireRecord<'a> {
    file: &'a str,
    line: u32,
    col: u32,
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

/// Renders diagnostics as newline-delimited JSON records.
pub struct JsonRenderer;

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, diag: &Diagnostic, source: Option<&SourceBuffer>) -> String {
        let record = WireRecord {
            file: source.map_or(UNKNOWN_FILE, |b| b.name()),
            line: diag.location.map_or(0, |l| l.line),
            col: diag.location.map_or(0, |l| l.col),
            level: diag.severity.wire_level(),
            message: &diag.message,
            suggestion: if diag.hints.is_empty() {
                None
            } else {
                Some(diag.hints.join("\n"))
            },
        };
        let mut line = serde_json::to_string(&record).unwrap_or_else(|_| "{}".to_string());
        line.push('\n');
        line
    }
}
